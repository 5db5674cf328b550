//! Input validation for names, fees and score titles.

use crate::error::CoreError;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a group or student name in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a score title in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Trim a group or student display name and check it is usable as a
/// master-record key.
///
/// Master records are deduplicated by exact name, so surrounding whitespace
/// is stripped before lookup.
pub fn normalize_name(field: &str, raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name.to_string())
}

/// Fees are charged per attended lesson and may be zero (free enrolment).
pub fn validate_fee(fee: Money) -> Result<(), CoreError> {
    if fee < 0 {
        return Err(CoreError::Validation(format!(
            "fee must be >= 0, got {fee}"
        )));
    }
    Ok(())
}

/// Trim a score title and check its length.
pub fn normalize_title(raw: &str) -> Result<String, CoreError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(title.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
