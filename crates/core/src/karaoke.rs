//! Karaoke signup queue rules and PIN gating.

use serde::Deserialize;

use crate::error::CoreError;
use crate::ordering;
use crate::types::{DbId, Timestamp};

/// Maximum length of singer names, song titles and artists.
pub const MAX_FIELD_LENGTH: usize = 120;

/// Accepted PIN length range (inclusive).
pub const MIN_PIN_LENGTH: usize = 4;
pub const MAX_PIN_LENGTH: usize = 8;

/// Direction for a one-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// A request to move one entry within the active queue.
///
/// Deserializes from either `{"direction": "up"}` or `{"position": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QueueMove {
    Step { direction: MoveDirection },
    To { position: i64 },
}

impl QueueMove {
    /// Apply the move to the current queue order (ids sorted by position).
    ///
    /// Returns `None` when `id` is not in the active queue.
    pub fn apply(self, order: &[DbId], id: DbId) -> Option<Vec<DbId>> {
        match self {
            QueueMove::Step { direction } => {
                ordering::swap_adjacent(order, id, direction == MoveDirection::Up)
            }
            QueueMove::To { position } => ordering::move_to_position(order, id, position),
        }
    }
}

/// Order entries by signup time, oldest first; ties broken by id.
pub fn order_by_signup_time(entries: &[(DbId, Timestamp)]) -> Vec<DbId> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    sorted.into_iter().map(|(id, _)| id).collect()
}

/// Validate a PIN: 4 to 8 ASCII digits.
pub fn validate_pin(pin: &str) -> Result<(), CoreError> {
    let len = pin.len();
    if !(MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&len) || !pin.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CoreError::Validation(format!(
            "PIN must be {MIN_PIN_LENGTH} to {MAX_PIN_LENGTH} digits"
        )));
    }
    Ok(())
}

/// Validate the free-text fields of a signup.
pub fn validate_signup_fields(singer_name: &str, song_title: &str) -> Result<(), CoreError> {
    crate::validation::require_non_empty("singer_name", singer_name)?;
    crate::validation::require_non_empty("song_title", song_title)?;
    crate::validation::validate_max_length("singer_name", singer_name, MAX_FIELD_LENGTH)?;
    crate::validation::validate_max_length("song_title", song_title, MAX_FIELD_LENGTH)?;
    Ok(())
}
