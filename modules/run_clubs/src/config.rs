//! Configuration for the run clubs module

use serde::Deserialize;

/// Run clubs configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size used when the caller does not pass one
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Largest page a caller may request
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,

    /// Maximum length of a club title
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            max_title_len: default_max_title_len(),
        }
    }
}

fn default_page_size() -> u64 {
    6
}

fn default_max_page_size() -> u64 {
    50
}

fn default_max_title_len() -> usize {
    100
}
