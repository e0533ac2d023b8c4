//! Configuration for the Pokemon reviews module

use serde::Deserialize;

/// Pokemon reviews configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lowest accepted review rating
    #[serde(default = "default_min_rating")]
    pub min_rating: i32,

    /// Highest accepted review rating
    #[serde(default = "default_max_rating")]
    pub max_rating: i32,

    /// Maximum length of Pokemon, category and review titles
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    /// Refuse to create a Pokemon whose normalized name is taken
    #[serde(default = "default_true")]
    pub reject_duplicate_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_rating: default_min_rating(),
            max_rating: default_max_rating(),
            max_name_len: default_max_name_len(),
            reject_duplicate_names: true,
        }
    }
}

fn default_min_rating() -> i32 {
    1
}

fn default_max_rating() -> i32 {
    5
}

fn default_max_name_len() -> usize {
    100
}

fn default_true() -> bool {
    true
}
