//! Per-document compliance status derivation.
//!
//! The displayed status of a compliance document is derived from two
//! independent axes: the stored review status and time-based expiry. Expiry
//! is never written back — an approved document whose expiry date has passed
//! still says approved in storage and is classified as expired here, at
//! evaluation time, against the caller's "as of" date.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Document, DocumentStatus};

/// Default number of months before expiry at which a document counts as
/// expiring soon.
pub const DEFAULT_EXPIRY_WARNING_MONTHS: u32 = 3;

/// The derived compliance status of one document slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentComplianceStatus {
    /// No document has been uploaded for this type.
    Missing,
    /// Uploaded and awaiting review; expiry is irrelevant until approved.
    Pending,
    /// Refused by an approver.
    Rejected,
    /// Approved but the expiry date has passed.
    Expired,
    /// Approved and expiring within the warning window.
    ExpiringSoon,
    /// Approved and not close to expiry.
    Verified,
}

impl std::fmt::Display for DocumentComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentComplianceStatus::Missing => write!(f, "missing"),
            DocumentComplianceStatus::Pending => write!(f, "pending"),
            DocumentComplianceStatus::Rejected => write!(f, "rejected"),
            DocumentComplianceStatus::Expired => write!(f, "expired"),
            DocumentComplianceStatus::ExpiringSoon => write!(f, "expiring soon"),
            DocumentComplianceStatus::Verified => write!(f, "verified"),
        }
    }
}

/// The evaluation of one document slot: the derived status plus the two
/// expiry flags the badge surfaces read directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEvaluation {
    /// The derived compliance status.
    pub status: DocumentComplianceStatus,
    /// True when the document is approved and inside the warning window.
    pub is_expiring: bool,
    /// True when the document is approved and past its expiry date.
    pub is_expired: bool,
}

impl DocumentEvaluation {
    fn of(status: DocumentComplianceStatus) -> Self {
        Self {
            status,
            is_expiring: status == DocumentComplianceStatus::ExpiringSoon,
            is_expired: status == DocumentComplianceStatus::Expired,
        }
    }
}

/// Evaluates one document slot.
///
/// The derivation:
/// - no document → missing
/// - stored status pending → pending
/// - stored status rejected → rejected
/// - stored status approved → subdivided by expiry date: strictly before
///   `as_of` → expired; strictly before `as_of + warning_months` →
///   expiring soon; otherwise (including no expiry date at all) → verified
///
/// A document expiring exactly at `as_of + warning_months` is still
/// verified; one expiring exactly at `as_of` is not yet expired.
///
/// # Examples
///
/// ```
/// use staffing_rules::models::{Document, DocumentCategory, DocumentStatus};
/// use staffing_rules::rules::{
///     DEFAULT_EXPIRY_WARNING_MONTHS, DocumentComplianceStatus, evaluate_document,
/// };
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let evaluation = evaluate_document(None, as_of, DEFAULT_EXPIRY_WARNING_MONTHS);
/// assert_eq!(evaluation.status, DocumentComplianceStatus::Missing);
/// ```
pub fn evaluate_document(
    document: Option<&Document>,
    as_of: NaiveDate,
    warning_months: u32,
) -> DocumentEvaluation {
    let Some(document) = document else {
        return DocumentEvaluation::of(DocumentComplianceStatus::Missing);
    };

    match document.status {
        DocumentStatus::Pending => DocumentEvaluation::of(DocumentComplianceStatus::Pending),
        DocumentStatus::Rejected => DocumentEvaluation::of(DocumentComplianceStatus::Rejected),
        DocumentStatus::Approved => {
            let Some(expiry) = document.expiry_date else {
                return DocumentEvaluation::of(DocumentComplianceStatus::Verified);
            };

            if expiry < as_of {
                return DocumentEvaluation::of(DocumentComplianceStatus::Expired);
            }

            let warning_boundary = as_of.checked_add_months(Months::new(warning_months));
            match warning_boundary {
                Some(boundary) if expiry < boundary => {
                    DocumentEvaluation::of(DocumentComplianceStatus::ExpiringSoon)
                }
                _ => DocumentEvaluation::of(DocumentComplianceStatus::Verified),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentCategory;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn document(status: DocumentStatus, expiry: Option<&str>) -> Document {
        Document {
            id: "doc_001".to_string(),
            document_type: "dbs_certificate".to_string(),
            title: "Enhanced DBS Certificate".to_string(),
            filename: "dbs.pdf".to_string(),
            issue_date: Some(make_date("2025-01-01")),
            expiry_date: expiry.map(make_date),
            status,
            category: DocumentCategory::Mandatory,
        }
    }

    fn as_of() -> NaiveDate {
        make_date("2026-01-15")
    }

    /// DS-001: no document is missing
    #[test]
    fn test_missing() {
        let evaluation = evaluate_document(None, as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::Missing);
        assert!(!evaluation.is_expiring);
        assert!(!evaluation.is_expired);
    }

    /// DS-002: pending stays pending even when already past expiry
    #[test]
    fn test_pending_ignores_expiry() {
        let doc = document(DocumentStatus::Pending, Some("2020-01-01"));
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::Pending);
        assert!(!evaluation.is_expired);
    }

    /// DS-003: rejected is rejected
    #[test]
    fn test_rejected() {
        let doc = document(DocumentStatus::Rejected, Some("2030-01-01"));
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::Rejected);
    }

    /// DS-004: approved and far from expiry is verified
    #[test]
    fn test_verified() {
        let doc = document(DocumentStatus::Approved, Some("2028-01-01"));
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::Verified);
        assert!(!evaluation.is_expiring);
        assert!(!evaluation.is_expired);
    }

    /// DS-005: approved with no expiry date never expires
    #[test]
    fn test_approved_without_expiry_is_verified() {
        let doc = document(DocumentStatus::Approved, None);
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::Verified);
    }

    /// DS-006: expiry strictly before "as of" is expired
    #[test]
    fn test_expired() {
        let doc = document(DocumentStatus::Approved, Some("2026-01-14"));
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::Expired);
        assert!(evaluation.is_expired);
        assert!(!evaluation.is_expiring);
    }

    /// DS-007: expiry on "as of" itself is not yet expired
    #[test]
    fn test_expiry_today_is_not_expired() {
        let doc = document(DocumentStatus::Approved, Some("2026-01-15"));
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::ExpiringSoon);
        assert!(evaluation.is_expiring);
        assert!(!evaluation.is_expired);
    }

    /// DS-008: expiry one day inside the warning window is expiring soon
    #[test]
    fn test_expiring_soon_inside_window() {
        let doc = document(DocumentStatus::Approved, Some("2026-04-14"));
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::ExpiringSoon);
    }

    /// DS-009: expiry exactly at the warning boundary is still verified
    #[test]
    fn test_expiry_at_warning_boundary_is_verified() {
        // as_of 2026-01-15 + 3 months = 2026-04-15.
        let doc = document(DocumentStatus::Approved, Some("2026-04-15"));
        let evaluation =
            evaluate_document(Some(&doc), as_of(), DEFAULT_EXPIRY_WARNING_MONTHS);
        assert_eq!(evaluation.status, DocumentComplianceStatus::Verified);
    }

    #[test]
    fn test_custom_warning_window() {
        let doc = document(DocumentStatus::Approved, Some("2026-02-10"));

        // One-month window: 2026-02-10 is outside as_of + 1 month? No —
        // 2026-01-15 + 1 month = 2026-02-15, so it is inside.
        let evaluation = evaluate_document(Some(&doc), as_of(), 1);
        assert_eq!(evaluation.status, DocumentComplianceStatus::ExpiringSoon);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentComplianceStatus::ExpiringSoon).unwrap(),
            "\"expiring_soon\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentComplianceStatus::Missing).unwrap(),
            "\"missing\""
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            format!("{}", DocumentComplianceStatus::ExpiringSoon),
            "expiring soon"
        );
        assert_eq!(format!("{}", DocumentComplianceStatus::Verified), "verified");
    }
}
