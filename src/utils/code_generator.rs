//! Short code generation and reserved-code checks.

use crate::error::AppError;
use serde_json::json;

/// Random bytes per code; hex encoding doubles this into 6 characters.
const CODE_LENGTH_BYTES: usize = 3;

/// Codes that would shadow an API route if used as a short code.
pub const RESERVED_CODES: &[&str] = &["urls", "shorten", "expand", "analytics", "qrcodes"];

/// Generates a random 6-character lowercase hex short code.
///
/// Uses `getrandom` for entropy.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(hex::encode(buffer))
}

/// Returns true if `code` collides with a route segment (case-insensitive).
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}
