//! Link entity representing a short ID to long URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Each `short_id` maps to exactly one `long_url`. Links are never updated or
/// deleted by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_id: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(short_id: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_id: String,
    pub long_url: String,
}
