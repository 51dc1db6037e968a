//! Short ID generation.
//!
//! Short IDs are cryptographically random and URL-safe, well under the
//! 20-character lookup bound enforced by unshorten.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const SHORT_ID_BYTES: usize = 9;

/// Generates a random short ID.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character ID.
///
/// # Errors
///
/// Returns the underlying error if the system random number generator fails.
pub fn generate_short_id() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; SHORT_ID_BYTES];

    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
