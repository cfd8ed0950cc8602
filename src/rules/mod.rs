//! Rule components for the staffing platform.
//!
//! This module contains the derivation rules the portals share: shift
//! duration calculation, shift-request validation, day/night detection, rate
//! multiplier determination and rate previews, document compliance
//! evaluation, shift cancellation windows, and notification preference
//! validation. Every function here is a pure computation over in-memory
//! values; there is no I/O at this layer.

mod cancellation;
mod compliance;
mod day_detection;
mod document_status;
mod duration;
mod multipliers;
mod preferences;
mod rate_preview;
mod shift_request;

pub use cancellation::{DEFAULT_CANCELLATION_NOTICE_HOURS, can_cancel};
pub use compliance::{ComplianceSummary, DocumentTypeCompliance, evaluate_compliance};
pub use day_detection::{get_day_type, get_shift_type};
pub use document_status::{
    DEFAULT_EXPIRY_WARNING_MONTHS, DocumentComplianceStatus, DocumentEvaluation, evaluate_document,
};
pub use duration::{DEFAULT_MAX_SHIFT_HOURS, DurationCheck, compute_duration};
pub use multipliers::applicable_multipliers;
pub use preferences::is_valid_preference_update;
pub use rate_preview::{RatePreviewForm, RatePreviewOutcome, calculate_rate_preview};
pub use shift_request::{ShiftRequestCheck, validate_shift_request};
