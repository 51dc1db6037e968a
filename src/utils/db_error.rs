//! Classification of database errors raised by link inserts.

/// Name of the primary-key constraint on `links.short_id`.
const SHORT_ID_CONSTRAINT: &str = "links_pkey";

/// Returns true if the error is a unique violation on the short ID.
///
/// Only this violation is worth retrying with a freshly generated ID.
pub fn is_unique_violation_on_short_id(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_ID_CONSTRAINT))
}
