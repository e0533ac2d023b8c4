//! SeaORM entities for the run clubs tables

pub mod address;
pub mod club;
