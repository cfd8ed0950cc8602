//! Shift request model.
//!
//! A shift request is constructed by a care-home or practice manager and
//! validated by this crate before submission to the external backend. The
//! end date is optional: overnight requests may omit it and let the end time
//! imply the following day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A request to fill a shift, as entered on the shift-request form.
///
/// # Example
///
/// ```
/// use staffing_rules::models::ShiftRequest;
/// use chrono::{NaiveDate, NaiveTime};
///
/// // Night shift ending the following morning, no explicit end date.
/// let request = ShiftRequest {
///     role: "healthcare_assistant".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     end_date: None,
///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     notes: None,
/// };
/// assert_eq!(
///     request.end_instant().date(),
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The staff role being requested (e.g. "registered_nurse").
    pub role: String,
    /// The date the shift starts.
    pub date: NaiveDate,
    /// The date the shift ends, for overnight requests that state it
    /// explicitly. Must be the start date or the following day.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The time the shift starts.
    pub start_time: NaiveTime,
    /// The time the shift ends.
    pub end_time: NaiveTime,
    /// Free-text notes for the agency.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftRequest {
    /// Returns the instant the shift starts.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Returns the instant the shift ends.
    ///
    /// When no explicit end date is given and the end time is earlier than
    /// the start time, the end is taken to be the following calendar day
    /// (overnight inference). An end time equal to the start time stays on
    /// the same day and therefore yields a zero-length span.
    pub fn end_instant(&self) -> NaiveDateTime {
        match self.end_date {
            Some(end_date) => end_date.and_time(self.end_time),
            None if self.end_time < self.start_time => {
                (self.date + Duration::days(1)).and_time(self.end_time)
            }
            None => self.date.and_time(self.end_time),
        }
    }
}
