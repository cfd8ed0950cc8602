//! Shift cancellation window.
//!
//! A scheduled shift can be cancelled while its start is still far enough
//! away. The caller surfaces the boolean as enabled/disabled UI state and
//! builds its own "why not" message when the answer is no.

use chrono::{Duration, NaiveDateTime};

use crate::models::{Shift, ShiftStatus};

/// Default minimum notice for cancelling a scheduled shift, in hours.
pub const DEFAULT_CANCELLATION_NOTICE_HOURS: i64 = 24;

/// Returns true if the shift can still be cancelled at `now`.
///
/// Completed and cancelled shifts are never cancellable. A shift that lacks
/// a schedulable start instant (incomplete upstream data) falls back to the
/// permissive default: cancellable while its status is open, assigned, or
/// accepted. Otherwise the shift is cancellable iff its start is strictly
/// more than `notice_hours` after `now`.
///
/// # Examples
///
/// ```
/// use staffing_rules::models::{Shift, ShiftStatus};
/// use staffing_rules::rules::{DEFAULT_CANCELLATION_NOTICE_HOURS, can_cancel};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     role: "healthcare_assistant".to_string(),
///     status: ShiftStatus::Accepted,
///     date: NaiveDate::from_ymd_opt(2026, 1, 20),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0),
/// };
///
/// let now = NaiveDate::from_ymd_opt(2026, 1, 15)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// assert!(can_cancel(&shift, now, DEFAULT_CANCELLATION_NOTICE_HOURS));
/// ```
pub fn can_cancel(shift: &Shift, now: NaiveDateTime, notice_hours: i64) -> bool {
    if matches!(shift.status, ShiftStatus::Completed | ShiftStatus::Cancelled) {
        return false;
    }

    match shift.start_instant() {
        Some(start) => start - now > Duration::hours(notice_hours),
        // Data-quality fallback: without a start instant there is no window
        // to measure, so any still-active shift stays cancellable.
        None => matches!(
            shift.status,
            ShiftStatus::Open | ShiftStatus::Assigned | ShiftStatus::Accepted
        ),
    }
}
