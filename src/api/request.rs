//! Request types for the staffing rules API.
//!
//! This module defines the JSON request structures for the rule endpoints.
//! Parsing happens here, once, at the boundary: handlers and rules work
//! with typed `chrono` values, never raw strings. Requests may carry an
//! explicit `as_of`/`now`/`today` so an evaluation is reproducible; absent,
//! handlers use the wall clock.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{
    Document, DocumentCategory, DocumentStatus, NotificationPreferences, PreferencePatch, Shift,
    ShiftRequest, ShiftStatus,
};

/// Request body for the `/shift-requests/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequestValidationRequest {
    /// The staff role being requested.
    pub role: String,
    /// The date the shift starts.
    pub date: NaiveDate,
    /// The explicit end date, for overnight requests that state one.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The time the shift starts.
    pub start_time: NaiveTime,
    /// The time the shift ends.
    pub end_time: NaiveTime,
    /// Free-text notes for the agency.
    #[serde(default)]
    pub notes: Option<String>,
    /// The requester's current date; defaults to the server's date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl From<ShiftRequestValidationRequest> for ShiftRequest {
    fn from(req: ShiftRequestValidationRequest) -> Self {
        ShiftRequest {
            role: req.role,
            date: req.date,
            end_date: req.end_date,
            start_time: req.start_time,
            end_time: req.end_time,
            notes: req.notes,
        }
    }
}

/// A document in a compliance evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// Unique identifier for the document.
    pub id: String,
    /// The document-type key this upload satisfies.
    pub document_type: String,
    /// Human-readable title.
    pub title: String,
    /// The uploaded file name.
    pub filename: String,
    /// The date the document was issued, when known.
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    /// The date the document expires, when it expires at all.
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    /// The stored review status.
    pub status: DocumentStatus,
    /// Whether the document is mandatory or supplementary.
    pub category: DocumentCategory,
}

impl From<DocumentRequest> for Document {
    fn from(req: DocumentRequest) -> Self {
        Document {
            id: req.id,
            document_type: req.document_type,
            title: req.title,
            filename: req.filename,
            issue_date: req.issue_date,
            expiry_date: req.expiry_date,
            status: req.status,
            category: req.category,
        }
    }
}

/// Request body for the `/compliance/evaluations` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceEvaluationRequest {
    /// The staff member's uploaded documents.
    pub documents: Vec<DocumentRequest>,
    /// The evaluation date; defaults to the server's date.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// A scheduled shift in a cancellation-check request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecordRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff role the shift was published for.
    pub role: String,
    /// The current lifecycle status.
    pub status: ShiftStatus,
    /// The shift date, when the record carries one.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The start time, when the record carries one.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The end time, when the record carries one.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
}

impl From<ShiftRecordRequest> for Shift {
    fn from(req: ShiftRecordRequest) -> Self {
        Shift {
            id: req.id,
            role: req.role,
            status: req.status,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

/// Request body for the `/shifts/cancellation-checks` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationCheckRequest {
    /// The shift to check.
    pub shift: ShiftRecordRequest,
    /// The evaluation instant; defaults to the server's clock.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `/notification-preferences/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceValidationRequest {
    /// The preferences as currently saved.
    pub current: NotificationPreferences,
    /// The proposed update.
    pub patch: PreferencePatch,
}
