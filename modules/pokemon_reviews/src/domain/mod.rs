//! Domain layer - business logic and services

pub mod rating;
pub mod repository;
pub mod service;
pub mod validation;

pub use repository::PokemonRepository;
pub use service::Service;
