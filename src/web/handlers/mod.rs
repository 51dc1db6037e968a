//! HTML page and static asset handlers.

mod favicon;
mod index;

pub use favicon::favicon_handler;
pub use index::{IndexTemplate, index_handler};
