//! Pokemon Reviews Module
//!
//! Pokemon, the categories they belong to and the reviews written about them,
//! persisted in a relational store through SeaORM.

// Public exports
pub mod contract;
pub use contract::{
    client::PokemonReviewsApi, error::PokemonError, Category, NewPokemon, NewReview, NewReviewer,
    Pokemon, PokemonUpdate, Review, Reviewer,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::PokemonReviewsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
