//! Web layer for the browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and static asset handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
