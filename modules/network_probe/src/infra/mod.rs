//! Infrastructure layer

pub mod lookup;

pub use lookup::LookupProbe;
