//! Scheduled shift model and related types.
//!
//! A scheduled shift is a record owned by the external backend; this crate
//! only reads it to decide cancellation eligibility. Upstream data quality is
//! imperfect: some historical shifts arrive without a date or start time, so
//! the scheduling fields are optional and the cancellation rule carries a
//! documented fallback for them.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The lifecycle status of a scheduled shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Published and not yet claimed.
    Open,
    /// Assigned to a staff member by a manager.
    Assigned,
    /// Accepted by the assigned staff member.
    Accepted,
    /// Worked and closed out.
    Completed,
    /// Cancelled before being worked.
    Cancelled,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::Open => write!(f, "open"),
            ShiftStatus::Assigned => write!(f, "assigned"),
            ShiftStatus::Accepted => write!(f, "accepted"),
            ShiftStatus::Completed => write!(f, "completed"),
            ShiftStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A scheduled shift as supplied by the shift list/detail surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff role the shift was published for.
    pub role: String,
    /// The current lifecycle status.
    pub status: ShiftStatus,
    /// The shift date, when the record carries one.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The start time of the shift, when the record carries one.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The end time of the shift, when the record carries one.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
}

impl Shift {
    /// Returns the start instant of the shift, when both the date and the
    /// start time are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_rules::models::{Shift, ShiftStatus};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     role: "healthcare_assistant".to_string(),
    ///     status: ShiftStatus::Open,
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15),
    ///     start_time: NaiveTime::from_hms_opt(9, 0, 0),
    ///     end_time: NaiveTime::from_hms_opt(17, 0, 0),
    /// };
    /// assert!(shift.start_instant().is_some());
    /// ```
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        Some(self.date?.and_time(self.start_time?))
    }
}
