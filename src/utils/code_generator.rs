//! Short code generation.
//!
//! Codes are opaque random tokens. Uniqueness is not checked here; the unique
//! index on `links.short_code` rejects the (unlikely) duplicate at insert time.

use base64::Engine as _;
use rand::Rng;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 8;

/// Generates a random 8-character short code.
///
/// Six bytes from the thread-local CSPRNG are encoded as URL-safe base64
/// without padding, so codes carry 48 bits of entropy and only contain
/// `A-Z`, `a-z`, `0-9`, `-` and `_`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];
    rand::rng().fill(&mut buffer);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
