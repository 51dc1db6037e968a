//! Utility functions for ID generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short ID generation
//! - [`url_rules`] - Input validation predicates and URL rewriting
//! - [`client_ip`] - Client address extraction for logging
//! - [`db_error`] - Database error classification

pub mod client_ip;
pub mod code_generator;
pub mod db_error;
pub mod url_rules;
