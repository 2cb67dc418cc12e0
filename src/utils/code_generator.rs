//! Short code generation for the in-memory delegate.
//!
//! Codes are random bytes from `getrandom`, encoded as URL-safe base64 without
//! padding and cut to the length the requested [`PathLength`] calls for.

use crate::domain::parameters::PathLength;
use base64::Engine as _;

/// Code length for [`PathLength::Short`].
pub const SHORT_CODE_LENGTH: usize = 4;

/// Code length for [`PathLength::Unguessable`].
pub const UNGUESSABLE_CODE_LENGTH: usize = 17;

pub fn code_length(path_length: PathLength) -> usize {
    match path_length {
        PathLength::Short => SHORT_CODE_LENGTH,
        PathLength::Unguessable => UNGUESSABLE_CODE_LENGTH,
    }
}

/// Generates a random URL-safe code of exactly `length` characters.
///
/// # Errors
///
/// Returns an error if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(17)?;
/// assert_eq!(code.len(), 17);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> Result<String, getrandom::Error> {
    let mut buffer = vec![0u8; (length * 3).div_ceil(4)];

    getrandom::fill(&mut buffer)?;

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
    code.truncate(length);
    Ok(code)
}
