//! Input parsing shared by contacts, bookings and inquiries.

use venue_core::booking::{split_client_name, validate_status, MAX_PHONE_LENGTH};
use venue_core::error::CoreError;
use venue_core::validation::{
    normalize_filter, parse_loose_number, require_non_empty, validate_email,
    validate_max_length, validate_non_negative,
};
use venue_db::models::booking::StatusPriceUpdate;
use venue_db::models::contact::{ClientDetails, StatusPriceRequest};

pub const INVALID_PRICE_MESSAGE: &str = "Price must be a valid number";

/// Parse an optional price sent as a number or numeric string.
pub fn parse_price(value: Option<&serde_json::Value>) -> Result<Option<f64>, CoreError> {
    let price = parse_loose_number(value, INVALID_PRICE_MESSAGE)?;
    if let Some(p) = price {
        validate_non_negative("price", p)?;
    }
    Ok(price)
}

/// Normalize an optional phone number: blank is `None`, long values rejected.
pub fn parse_phone(value: Option<&str>) -> Result<Option<String>, CoreError> {
    let phone = normalize_filter(value);
    if let Some(p) = &phone {
        validate_max_length("phone", p, MAX_PHONE_LENGTH)?;
    }
    Ok(phone)
}

/// Build the contact lookup key from a public form's client fields.
pub fn client_details(
    name: &str,
    email: &str,
    phone: Option<&str>,
) -> Result<ClientDetails, CoreError> {
    require_non_empty("clientName", name)?;
    let email = email.trim();
    validate_email(email)?;
    let (first_name, last_name) = split_client_name(name);

    Ok(ClientDetails {
        first_name,
        last_name,
        email: email.to_string(),
        phone: parse_phone(phone)?,
    })
}

/// Validate an admin status/price patch.
pub fn status_price_update(input: &StatusPriceRequest) -> Result<StatusPriceUpdate, CoreError> {
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    Ok(StatusPriceUpdate {
        status: input.status.clone(),
        price: parse_price(input.price.as_ref())?,
    })
}

/// Reject blank required text fields, naming the field in the message.
pub fn require_all(fields: &[(&str, &str)]) -> Result<(), CoreError> {
    for (name, value) in fields {
        require_non_empty(name, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn price_accepts_strings_and_rejects_negatives() {
        assert_eq!(parse_price(Some(&json!("120.50"))).unwrap(), Some(120.5));
        assert_eq!(parse_price(None).unwrap(), None);
        assert_matches!(
            parse_price(Some(&json!("lots"))),
            Err(CoreError::Validation(msg)) if msg == INVALID_PRICE_MESSAGE
        );
        assert_matches!(parse_price(Some(&json!(-5))), Err(CoreError::Validation(_)));
    }

    #[test]
    fn client_name_is_split_on_first_space() {
        let client = client_details("Mary Ann Smith", " mary@example.com ", Some(" ")).unwrap();
        assert_eq!(client.first_name, "Mary");
        assert_eq!(client.last_name, "Ann Smith");
        assert_eq!(client.email, "mary@example.com");
        assert_eq!(client.phone, None);
    }

    #[test]
    fn long_phone_is_rejected() {
        assert!(parse_phone(Some("1234567890123456")).is_err());
        assert_eq!(
            parse_phone(Some("555-0100")).unwrap().as_deref(),
            Some("555-0100")
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let input = StatusPriceRequest {
            status: Some("Maybe".into()),
            price: None,
        };
        assert!(status_price_update(&input).is_err());

        let input = StatusPriceRequest {
            status: Some("Booked & Paid".into()),
            price: Some(json!(300)),
        };
        let update = status_price_update(&input).unwrap();
        assert_eq!(update.status.as_deref(), Some("Booked & Paid"));
        assert_eq!(update.price, Some(300.0));
    }
}
