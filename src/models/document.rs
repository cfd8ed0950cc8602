//! Compliance document model and related types.
//!
//! Documents are created and approved by external collaborators; this crate
//! only reads and classifies them. Expiry is a derived state: an approved
//! document whose expiry date has passed keeps `status = approved` in
//! storage and is classified as expired at evaluation time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The stored review status of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Uploaded and awaiting review.
    Pending,
    /// Accepted by an approver.
    Approved,
    /// Refused by an approver.
    Rejected,
}

/// Whether a document type is required for compliance or merely supporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Required for the staff member to be compliant.
    Mandatory,
    /// Optional supporting material.
    Supplementary,
}

/// An uploaded compliance document.
///
/// # Example
///
/// ```
/// use staffing_rules::models::{Document, DocumentCategory, DocumentStatus};
/// use chrono::NaiveDate;
///
/// let document = Document {
///     id: "doc_001".to_string(),
///     document_type: "dbs_certificate".to_string(),
///     title: "Enhanced DBS Certificate".to_string(),
///     filename: "dbs.pdf".to_string(),
///     issue_date: NaiveDate::from_ymd_opt(2025, 6, 1),
///     expiry_date: NaiveDate::from_ymd_opt(2028, 6, 1),
///     status: DocumentStatus::Approved,
///     category: DocumentCategory::Mandatory,
/// };
/// assert_eq!(document.document_type, "dbs_certificate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: String,
    /// The document-type key this upload satisfies (e.g. "dbs_certificate").
    pub document_type: String,
    /// Human-readable title shown in the portals.
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
