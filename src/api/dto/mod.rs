//! Data Transfer Objects for requests and responses.
//!
//! All DTOs use Serde: form and query parameters are deserialized, API-mode
//! bodies are serialized to JSON.

pub mod output;
pub mod params;

pub use output::{ErrorBody, SuccessBody};
pub use params::{IndexParams, ModeParams, QueryForm};
