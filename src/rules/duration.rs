//! Shift duration calculation.
//!
//! This module computes the elapsed time between the start and end of a
//! requested shift, inferring an overnight span when no explicit end date is
//! given, and rejecting degenerate or excessive durations. The result is a
//! structured check, never an error, so the shift-request form can render
//! inline guidance without a failure path.

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default upper bound on shift length, in hours. The bound is inclusive: a
/// shift of exactly this length is valid.
pub const DEFAULT_MAX_SHIFT_HOURS: Decimal = Decimal::from_parts(16, 0, 0, false, 0);

/// The result of a duration calculation.
///
/// # Example
///
/// ```
/// use staffing_rules::rules::{DEFAULT_MAX_SHIFT_HOURS, compute_duration};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let check = compute_duration(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     None,
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     DEFAULT_MAX_SHIFT_HOURS,
/// );
/// assert!(check.is_valid);
/// assert!(check.is_overnight);
/// assert_eq!(check.hours, 8);
/// assert_eq!(check.minutes, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationCheck {
    /// Whether the duration lies in the accepted range.
    pub is_valid: bool,
    /// Whole hours of the duration (zero when the span is degenerate).
    pub hours: i64,
    /// Remaining minutes of the duration, 0–59.
    pub minutes: i64,
    /// Whether the shift ends on a later calendar day than it starts.
    pub is_overnight: bool,
    /// A short human-readable summary when valid, or the reason the
    /// duration was rejected.
    pub message: String,
}

impl DurationCheck {
    /// Returns the duration in hours as a decimal (e.g. 8.5 for 8h 30m).
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.hours * 60 + self.minutes) / Decimal::from(60)
    }
}

/// Computes the duration of a requested shift.
///
/// The start date and start time are combined into one instant. If an
/// explicit end date is supplied it is combined with the end time;
/// otherwise, an end time earlier than the start time implies the following
/// calendar day (overnight inference), and any other end time stays on the
/// start date.
///
/// # Arguments
///
/// * `start_date` - The date the shift starts
/// * `end_date` - The explicit end date, when the form states one
/// * `start_time` - The time the shift starts
/// * `end_time` - The time the shift ends
/// * `max_hours` - The inclusive upper bound on shift length
///
/// # Returns
///
/// A [`DurationCheck`]. The check is valid iff the duration is strictly
/// greater than zero and at most `max_hours`. An end instant at or before
/// the start instant is reported as "End time must be after start time".
///
/// # Examples
///
/// ```
/// use staffing_rules::rules::{DEFAULT_MAX_SHIFT_HOURS, compute_duration};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
///
/// // Zero-length spans are invalid.
/// let check = compute_duration(date, None, nine, nine, DEFAULT_MAX_SHIFT_HOURS);
/// assert!(!check.is_valid);
/// assert_eq!(check.message, "End time must be after start time");
/// ```
pub fn compute_duration(
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    start_time: NaiveTime,
    end_time: NaiveTime,
    max_hours: Decimal,
) -> DurationCheck {
    let start = start_date.and_time(start_time);
    let end = match end_date {
        Some(date) => date.and_time(end_time),
        None if end_time < start_time => (start_date + Duration::days(1)).and_time(end_time),
        None => start_date.and_time(end_time),
    };

    let total_minutes = (end - start).num_minutes();
    if total_minutes <= 0 {
        return DurationCheck {
            is_valid: false,
            hours: 0,
            minutes: 0,
            is_overnight: false,
            message: "End time must be after start time".to_string(),
        };
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let is_overnight = end.date() > start.date();
    let duration_hours = Decimal::from(total_minutes) / Decimal::from(60);

    if duration_hours > max_hours {
        return DurationCheck {
            is_valid: false,
            hours,
            minutes,
            is_overnight,
            message: format!(
                "Shift duration cannot exceed {} hours",
                max_hours.normalize()
            ),
        };
    }

    let message = if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    };

    DurationCheck {
        is_valid: true,
        hours,
        minutes,
        is_overnight,
        message,
    }
}
