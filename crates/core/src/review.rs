//! Review validation rules.

use crate::error::CoreError;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

/// Maximum length of the reviewer name.
pub const MAX_NAME_LENGTH: usize = 80;

/// Maximum length of the service label.
pub const MAX_SERVICE_LENGTH: usize = 50;

/// Message returned when a required review field is absent.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: name, rating, service, description";

/// Message returned when `rating` cannot be interpreted as a number.
pub const INVALID_RATING_MESSAGE: &str =
    "Invalid value for 'rating'. It must be a number (e.g., 4.5).";

/// Validate that a rating is in `(0, 5]`. Half stars are allowed.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !rating.is_finite() || rating <= 0.0 || rating > MAX_RATING {
        return Err(CoreError::Validation(format!(
            "Rating must be greater than 0 and at most {MAX_RATING}"
        )));
    }
    Ok(())
}

/// Validate the text fields of a new review.
pub fn validate_review_text(name: &str, service: &str, description: &str) -> Result<(), CoreError> {
    crate::validation::require_non_empty("name", name)?;
    crate::validation::require_non_empty("service", service)?;
    crate::validation::require_non_empty("description", description)?;
    crate::validation::validate_max_length("name", name, MAX_NAME_LENGTH)?;
    crate::validation::validate_max_length("service", service, MAX_SERVICE_LENGTH)?;
    Ok(())
}
