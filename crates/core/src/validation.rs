//! Field-level validation helpers shared by every resource.
//!
//! Request DTOs that carry fixed-shape fields derive `validator::Validate`;
//! the helpers here cover the loosely typed inputs the public forms send
//! (numbers posted as strings, optional blanks).

use validator::ValidateEmail;

use crate::error::CoreError;

/// Reject empty or whitespace-only values.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Trim a field supplied on an update in place, rejecting a blank value.
///
/// `None` means "leave unchanged" and passes through.
pub fn trim_if_present(field: &str, value: &mut Option<String>) -> Result<(), CoreError> {
    if let Some(v) = value.as_mut() {
        *v = v.trim().to_string();
        require_non_empty(field, v)?;
    }
    Ok(())
}

/// Reject values longer than `max` characters.
pub fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters"
        )));
    }
    Ok(())
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    Ok(())
}

/// Reject NaN, infinities and negative amounts.
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Interpret a loosely typed JSON number.
///
/// Accepts JSON numbers and numeric strings. `null`, a missing value and
/// blank strings all mean "not provided". Anything else is rejected with
/// `message`.
pub fn parse_loose_number(
    value: Option<&serde_json::Value>,
    message: &str,
) -> Result<Option<f64>, CoreError> {
    let parsed = match value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

/// Normalize an optional filter string: trimmed, `None` when blank.
pub fn normalize_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
