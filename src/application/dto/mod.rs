//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without wiring serde shapes into the domain model.

pub mod character;
pub mod combat;
pub mod envelope;
pub mod quest;

pub use character::*;
pub use combat::*;
pub use envelope::ApiResponse;
pub use quest::*;
