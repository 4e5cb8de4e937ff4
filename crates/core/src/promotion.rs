//! Promotion date-window rules.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Reject windows whose end precedes their start.
pub fn validate_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation(format!(
                "end_date {end} must not precede start_date {start}"
            )));
        }
    }
    Ok(())
}

/// Whether a promotion should be shown publicly on `today`.
///
/// Open-ended bounds are unbounded; both bounds are inclusive.
pub fn is_running(
    is_active: bool,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    is_active && start.map_or(true, |s| s <= today) && end.map_or(true, |e| today <= e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_validation() {
        assert!(validate_window(None, None).is_ok());
        assert!(validate_window(Some(date(2025, 1, 1)), None).is_ok());
        assert!(validate_window(Some(date(2025, 1, 1)), Some(date(2025, 1, 1))).is_ok());
        assert!(validate_window(Some(date(2025, 2, 1)), Some(date(2025, 1, 1))).is_err());
    }

    #[test]
    fn test_is_running() {
        let today = date(2025, 6, 15);
        assert!(is_running(true, None, None, today));
        assert!(is_running(true, Some(today), Some(today), today));
        assert!(!is_running(false, None, None, today));
        assert!(!is_running(true, Some(date(2025, 6, 16)), None, today));
        assert!(!is_running(true, None, Some(date(2025, 6, 14)), today));
    }
}
