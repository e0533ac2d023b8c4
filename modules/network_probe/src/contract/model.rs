use serde::{Deserialize, Serialize};

/// Options attached to an outgoing ping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingOptions {
    pub dont_fragment: bool,
    /// Hop limit
    pub ttl: u8,
}

impl Default for PingOptions {
    fn default() -> Self {
        Self {
            dont_fragment: true,
            ttl: 1,
        }
    }
}
