//! Domain models for the staffing rules engine.
//!
//! This module contains the data structures the rule components read and
//! classify: compliance documents, scheduled shifts, shift requests, rate
//! previews, and notification preferences.

mod document;
mod preferences;
mod rate_preview;
mod shift;
mod shift_request;

pub use document::{Document, DocumentCategory, DocumentStatus};
pub use preferences::{
    ChannelToggles, NotificationCategory, NotificationPreferences, PreferencePatch,
};
pub use rate_preview::{
    AppliedMultiplier, DayType, MultiplierKind, PricingUnavailable, RatePreview, ShiftType,
};
pub use shift::{Shift, ShiftStatus};
pub use shift_request::ShiftRequest;
