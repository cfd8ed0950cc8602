//! Shift request validation.
//!
//! Validates a shift request against its dating invariants before
//! submission: the start date must not be in the past, an explicit end date
//! must be the start date or the following day, and the duration must lie in
//! the accepted range. The result is a structured check, never an error.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftRequest;

use super::duration::{DurationCheck, compute_duration};

/// The result of validating a shift request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequestCheck {
    /// Whether the request passed every invariant.
    pub is_valid: bool,
    /// The duration summary when valid, or the first failing invariant.
    pub message: String,
    /// The underlying duration calculation.
    pub duration: DurationCheck,
}

/// Validates a shift request against the submission invariants.
///
/// Invariants, checked in order:
/// 1. The start date must not be strictly before `today`.
/// 2. An explicit end date must equal the start date or the following day.
/// 3. The duration must be strictly positive and at most `max_hours`.
///
/// # Arguments
///
/// * `request` - The shift request to validate
/// * `today` - The requester's current date
/// * `max_hours` - The inclusive upper bound on shift length
///
/// # Examples
///
/// ```
/// use staffing_rules::models::ShiftRequest;
/// use staffing_rules::rules::{DEFAULT_MAX_SHIFT_HOURS, validate_shift_request};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let request = ShiftRequest {
///     role: "healthcare_assistant".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     end_date: None,
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     notes: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// let check = validate_shift_request(&request, today, DEFAULT_MAX_SHIFT_HOURS);
/// assert!(check.is_valid);
/// assert_eq!(check.message, "8h");
/// ```
pub fn validate_shift_request(
    request: &ShiftRequest,
    today: NaiveDate,
    max_hours: Decimal,
) -> ShiftRequestCheck {
    let duration = compute_duration(
        request.date,
        request.end_date,
        request.start_time,
        request.end_time,
        max_hours,
    );

    if request.date < today {
        return ShiftRequestCheck {
            is_valid: false,
            message: "Shift date cannot be in the past".to_string(),
            duration,
        };
    }

    if let Some(end_date) = request.end_date {
        if end_date != request.date && end_date != request.date + Duration::days(1) {
            return ShiftRequestCheck {
                is_valid: false,
                message: "End date must be the start date or the following day".to_string(),
                duration,
            };
        }
    }

    if !duration.is_valid {
        let message = duration.message.clone();
        return ShiftRequestCheck {
            is_valid: false,
            message,
            duration,
        };
    }

    let message = duration.message.clone();
    ShiftRequestCheck {
        is_valid: true,
        message,
        duration,
    }
}
