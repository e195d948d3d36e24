//! Short code generation and validation utilities.
//!
//! Random codes are drawn uniformly from the 62-symbol alphabet
//! `A-Z a-z 0-9`. Custom codes supplied by users are checked for shape and
//! reserved names before they reach the store.

use std::sync::LazyLock;

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;

use crate::error::AppError;

/// Length of randomly generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Length used once the default length keeps colliding.
pub const EXTENDED_CODE_LENGTH: usize = 8;

/// Maximum length of a user-supplied custom code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Codes that would shadow a fixed route.
const RESERVED_CODES: &[&str] = &["health"];

static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("custom code regex is valid"));

/// Generates a random alphanumeric code of the given length.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::validation(format!(
            "Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"
        )));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::validation(
            "Custom code can only contain letters, digits, underscores and hyphens",
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::validation("This code is reserved. Try another one."));
    }

    Ok(())
}
