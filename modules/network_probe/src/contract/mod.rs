//! Contract layer - probe port and option types

pub mod model;
pub mod sender;

pub use model::PingOptions;
pub use sender::ProbeSender;
