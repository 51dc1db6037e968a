//! HTTP request handlers for the query and resolve endpoints.

pub mod query;
pub mod resolve;

pub use query::query_handler;
pub use resolve::resolve_handler;
