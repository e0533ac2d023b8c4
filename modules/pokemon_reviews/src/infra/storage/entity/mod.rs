//! SeaORM entities for the Pokemon reviews tables

pub mod category;
pub mod pokemon;
pub mod pokemon_category;
pub mod review;
pub mod reviewer;
