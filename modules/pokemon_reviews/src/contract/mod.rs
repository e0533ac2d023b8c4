//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::PokemonReviewsApi;
pub use error::PokemonError;
pub use model::{
    Category, NewPokemon, NewReview, NewReviewer, Pokemon, PokemonUpdate, Review, Reviewer,
};
