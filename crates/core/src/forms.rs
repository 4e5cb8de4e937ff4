//! Named UI visibility flags.

/// Form name consulted before accepting karaoke signups.
pub const FORM_KARAOKE: &str = "karaoke";

/// Visibility reported for forms that have never been configured.
pub const DEFAULT_VISIBILITY: bool = true;

/// Maximum length of a form name.
pub const MAX_FORM_NAME_LENGTH: usize = 50;

/// Validate a form name: lowercase ASCII letters, digits, `-` and `_`.
pub fn validate_form_name(name: &str) -> Result<(), crate::error::CoreError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_FORM_NAME_LENGTH
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(crate::error::CoreError::Validation(format!(
            "Invalid form name '{name}'. Use lowercase letters, digits, '-' or '_'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_names() {
        assert!(validate_form_name(FORM_KARAOKE).is_ok());
        assert!(validate_form_name("booking_form-2").is_ok());
        assert!(validate_form_name("").is_err());
        assert!(validate_form_name("Karaoke").is_err());
        assert!(validate_form_name("has space").is_err());
        assert!(validate_form_name(&"a".repeat(51)).is_err());
    }
}
