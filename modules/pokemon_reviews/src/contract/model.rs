//! Contract models for the Pokemon reviews module
//!
//! These models are transport-agnostic and used for inter-module communication.

use chrono::NaiveDate;

/// A Pokemon together with its categories and reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    /// Categories linked through the join table, ordered by name
    pub categories: Vec<Category>,
    /// Reviews ordered by id
    pub reviews: Vec<Review>,
}

/// A category shared by many Pokemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// A rated review of one Pokemon by one reviewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub reviewer: Reviewer,
}

/// Author of reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Input for creating a Pokemon
///
/// Categories are referenced by name and reviewers by first + last name; both
/// are created when missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPokemon {
    pub name: String,
    pub birth_date: NaiveDate,
    pub categories: Vec<String>,
    pub reviews: Vec<NewReview>,
}

/// Review supplied together with a new Pokemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub reviewer: NewReviewer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReviewer {
    pub first_name: String,
    pub last_name: String,
}

/// Mutable fields of an existing Pokemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonUpdate {
    pub name: String,
    pub birth_date: NaiveDate,
}

impl Reviewer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl NewReviewer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
