//! HTTP API module for the staffing rules engine.
//!
//! This module provides the REST endpoints the portal surfaces call:
//! shift-request validation, rate previews, compliance evaluation,
//! cancellation checks, and notification-preference validation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CancellationCheckRequest, ComplianceEvaluationRequest, DocumentRequest,
    PreferenceValidationRequest, ShiftRecordRequest, ShiftRequestValidationRequest,
};
pub use response::{ApiError, CancellationCheckResponse, PreferenceValidationResponse};
pub use state::AppState;
