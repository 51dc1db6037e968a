//! HTTP layer for the query and resolve endpoints.
//!
//! Translates HTTP requests into service operations and renders outcomes
//! through the [`responder`].
//!
//! # Modules
//!
//! - [`dto`] - Form, query and JSON body types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`responder`] - Redirect or JSON output
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod responder;
pub mod routes;
