//! Front-end form visibility flags.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::Timestamp;

/// A stored form flag. Forms that were never stored are reported with
/// `updated_at: None` and the default visibility.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormState {
    pub form_name: String,
    pub is_visible: bool,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetFormState {
    pub is_visible: bool,
}
