//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Validates a shift identifier.
///
/// Requirements:
/// - Non-empty once trimmed
/// - At most 50 characters
/// - Letters, digits, spaces, underscores and dashes only (so values such
///   as "morning", "mañana" or "turno-tarde" all pass)
pub fn validate_shift(shift: &str) -> Result<(), ValidationError> {
    if shift.trim().is_empty() || shift.len() > 50 {
        return Err(ValidationError::new("shift_invalid_length"));
    }

    if !shift
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '_' || c == '-')
    {
        return Err(ValidationError::new("shift_invalid_characters"));
    }

    Ok(())
}
