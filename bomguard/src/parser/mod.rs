pub mod eagle;
pub mod schema;

// Re-export for convenience
pub use eagle::{EagleParser, EagleParseError};
pub use schema::*;
