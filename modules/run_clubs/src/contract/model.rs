//! Contract models for the run clubs module
//!
//! These models are transport-agnostic and used for inter-module communication.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// A running club and the address it owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    /// Store-assigned identifier
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Image URL
    pub image: Option<String>,
    pub category: ClubCategory,
    pub address: Address,
    pub created_at: DateTime<Utc>,
}

/// Street address owned by exactly one club
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub city: String,
    /// Two-letter state code, upper case
    pub state: String,
}

/// Kind of running club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubCategory {
    RoadRunner,
    Womens,
    City,
    Trail,
    Endurance,
}

/// Input for creating a club
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClub {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: ClubCategory,
    pub address: NewAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
}

/// Replacement values for an existing club; the address is edited in place
pub type ClubUpdate = NewClub;

impl ClubCategory {
    pub const ALL: [ClubCategory; 5] = [
        ClubCategory::RoadRunner,
        ClubCategory::Womens,
        ClubCategory::City,
        ClubCategory::Trail,
        ClubCategory::Endurance,
    ];

    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubCategory::RoadRunner => "ROAD_RUNNER",
            ClubCategory::Womens => "WOMENS",
            ClubCategory::City => "CITY",
            ClubCategory::Trail => "TRAIL",
            ClubCategory::Endurance => "ENDURANCE",
        }
    }
}

impl fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ClubCategory {
    type Err = String;

    /// Accepts the storage form as well as `RoadRunner`, `road-runner`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        ClubCategory::ALL
            .into_iter()
            .find(|c| c.as_str().replace('_', "") == folded)
            .ok_or_else(|| format!("unknown club category '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_several_spellings() {
        assert_eq!("ROAD_RUNNER".parse(), Ok(ClubCategory::RoadRunner));
        assert_eq!("RoadRunner".parse(), Ok(ClubCategory::RoadRunner));
        assert_eq!("road-runner".parse(), Ok(ClubCategory::RoadRunner));
        assert_eq!("city".parse(), Ok(ClubCategory::City));
        assert!("swimming".parse::<ClubCategory>().is_err());
    }

    #[test]
    fn category_round_trips_through_storage_form() {
        for category in ClubCategory::ALL {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }
}
