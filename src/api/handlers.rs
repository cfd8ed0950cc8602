//! HTTP request handlers for the staffing rules API.
//!
//! This module contains the handler functions for all rule endpoints. Every
//! handler follows the same shape: parse the typed request at the boundary,
//! validate any role code against the catalog, run the pure rule, and return
//! the structured result.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Document, Shift, ShiftRequest};
use crate::rules::{
    RatePreviewForm, RatePreviewOutcome, calculate_rate_preview, can_cancel, evaluate_compliance,
    is_valid_preference_update, validate_shift_request,
};

use super::request::{
    CancellationCheckRequest, ComplianceEvaluationRequest, PreferenceValidationRequest,
    ShiftRequestValidationRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CancellationCheckResponse, PreferenceValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shift-requests/validate", post(shift_request_handler))
        .route("/rate-previews", post(rate_preview_handler))
        .route("/compliance/evaluations", post(compliance_handler))
        .route("/shifts/cancellation-checks", post(cancellation_handler))
        .route(
            "/notification-preferences/validate",
            post(preference_handler),
        )
        .with_state(state)
}

/// Unwraps a JSON payload, mapping axum's rejection into the API error body.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // The body text carries the detailed error from serde.
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => ApiError::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            ),
            _ => ApiError::malformed_json("Failed to parse request body"),
        }),
    }
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /shift-requests/validate.
async fn shift_request_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequestValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let config = state.config();
    if let Err(err) = config.get_role(&request.role) {
        warn!(
            correlation_id = %correlation_id,
            role = %request.role,
            "Role not found"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let max_hours = config.policy().max_shift_hours;
    let shift_request: ShiftRequest = request.into();
    let check = validate_shift_request(&shift_request, today, max_hours);

    info!(
        correlation_id = %correlation_id,
        role = %shift_request.role,
        is_valid = check.is_valid,
        "Shift request validated"
    );
    json_ok(check)
}

/// Handler for POST /rate-previews.
///
/// Returns JSON `null` while the form is not yet computable, so the form
/// can poll on every keystroke without a failure path.
async fn rate_preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<RatePreviewForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let form = match parse_payload(payload, correlation_id) {
        Ok(form) => form,
        Err(error) => return bad_request(error),
    };

    if let Some(role) = form.role.as_deref() {
        if let Err(err) = state.config().get_role(role) {
            warn!(correlation_id = %correlation_id, role = %role, "Role not found");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    }

    let outcome = calculate_rate_preview(&form, state.config().config());
    match &outcome {
        Some(RatePreviewOutcome::Priced(preview)) => info!(
            correlation_id = %correlation_id,
            total_external_cost = %preview.total_external_cost,
            "Rate preview priced"
        ),
        Some(RatePreviewOutcome::Unavailable(unavailable)) => warn!(
            correlation_id = %correlation_id,
            role = %unavailable.role,
            "No active rate card for preview"
        ),
        None => info!(correlation_id = %correlation_id, "Rate preview not yet computable"),
    }
    json_ok(outcome)
}

/// Handler for POST /compliance/evaluations.
async fn compliance_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComplianceEvaluationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let documents: Vec<Document> = request.documents.into_iter().map(Into::into).collect();

    let config = state.config();
    let summary = evaluate_compliance(
        &documents,
        config.document_types(),
        as_of,
        config.policy().expiry_warning_months,
    );

    info!(
        correlation_id = %correlation_id,
        documents = documents.len(),
        mandatory_progress_pct = summary.mandatory_progress_pct,
        "Compliance evaluated"
    );
    json_ok(summary)
}

/// Handler for POST /shifts/cancellation-checks.
async fn cancellation_handler(
    State(state): State<AppState>,
    payload: Result<Json<CancellationCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let now = request.now.unwrap_or_else(|| Utc::now().naive_utc());
    let shift: Shift = request.shift.into();
    let cancellable = can_cancel(
        &shift,
        now,
        state.config().policy().cancellation_notice_hours,
    );

    info!(
        correlation_id = %correlation_id,
        shift_id = %shift.id,
        cancellable,
        "Cancellation window checked"
    );
    json_ok(CancellationCheckResponse { cancellable })
}

/// Handler for POST /notification-preferences/validate.
async fn preference_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PreferenceValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let valid = is_valid_preference_update(&request.current, &request.patch);
    info!(correlation_id = %correlation_id, valid, "Preference update validated");
    json_ok(PreferenceValidationResponse { valid })
}
