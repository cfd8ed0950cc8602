//! Day and shift classification.
//!
//! This module resolves the two axes a rate-card lookup is keyed on: the day
//! type of the shift date and the shift type of the start time against the
//! configured night window. Bank-holiday detection is deliberately not part
//! of the day type; it is a separate condition layered on top by the rate
//! multiplier engine.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::config::ShiftPolicy;
use crate::models::{DayType, ShiftType};

/// Determines the day type for a given date.
///
/// # Examples
///
/// ```
/// use staffing_rules::models::DayType;
/// use staffing_rules::rules::get_day_type;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Weekend);
///
/// // 2026-01-15 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(get_day_type(thursday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// Determines the shift type from a start time against the policy's night
/// window.
///
/// The night window may wrap midnight (e.g. 20:00–06:00); the start of the
/// window is inclusive, the end exclusive.
///
/// # Examples
///
/// ```no_run
/// use staffing_rules::config::ConfigLoader;
/// use staffing_rules::models::ShiftType;
/// use staffing_rules::rules::get_shift_type;
/// use chrono::NaiveTime;
///
/// let loader = ConfigLoader::load("./config/staffing").unwrap();
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// assert_eq!(get_shift_type(start, loader.policy()), ShiftType::Night);
/// ```
pub fn get_shift_type(start_time: NaiveTime, policy: &ShiftPolicy) -> ShiftType {
    if in_window(start_time, policy.night_window_start, policy.night_window_end) {
        ShiftType::Night
    } else {
        ShiftType::Day
    }
}

/// Half-open window membership, supporting windows that wrap midnight.
fn in_window(time: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    if start < end {
        time >= start && time < end
    } else {
        time >= start || time < end
    }
}
