//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod response;
pub mod save;

pub use response::{ApiResponse, Status};
pub use save::{SaveRequest, SaveResponse};
