//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, with a separate
//! struct for creation:
//!
//! - [`Link`] - A stored short ID to long URL mapping
//! - [`NewLink`] - Input for creating a mapping

pub mod link;

pub use link::{Link, NewLink};
