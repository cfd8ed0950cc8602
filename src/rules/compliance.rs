//! Aggregate compliance evaluation.
//!
//! Walks the document-type catalog, derives the status of every slot from
//! the uploaded documents, and computes the mandatory and overall completion
//! percentages the profile surfaces show as progress bars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::DocumentTypeEntry;
use crate::models::Document;

use super::document_status::{DocumentComplianceStatus, evaluate_document};

/// The derived compliance state of one catalog slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeCompliance {
    /// The document-type key.
    pub document_type: String,
    /// The human-readable label from the catalog.
    pub label: String,
    /// Whether the type is mandatory.
    pub mandatory: bool,
    /// The derived status for this slot.
    pub status: DocumentComplianceStatus,
    /// The id of the document backing the status, when one exists.
    pub document_id: Option<String>,
}

/// The aggregate compliance picture for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// Percentage of mandatory types with an approved, non-expired document.
    pub mandatory_progress_pct: u32,
    /// Percentage across the whole catalog, mandatory and supplementary.
    pub overall_progress_pct: u32,
    /// Per-slot statuses, in catalog order.
    pub per_document: Vec<DocumentTypeCompliance>,
}

/// Status precedence when several uploads exist for one type: the slot shows
/// the most favourable one.
fn precedence(status: DocumentComplianceStatus) -> u8 {
    match status {
        DocumentComplianceStatus::Verified => 0,
        DocumentComplianceStatus::ExpiringSoon => 1,
        DocumentComplianceStatus::Pending => 2,
        DocumentComplianceStatus::Rejected => 3,
        DocumentComplianceStatus::Expired => 4,
        DocumentComplianceStatus::Missing => 5,
    }
}

/// Integer percentage with round-half-up, guarding the empty catalog.
fn percent(complete: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((2 * complete * 100 + total) / (2 * total)) as u32
}

/// Evaluates compliance across the whole document-type catalog.
///
/// For every catalog entry the uploaded documents of that type are
/// evaluated and the slot takes the most favourable result. A slot counts
/// as complete when its document is approved and not expired (verified or
/// expiring soon — an expiring document is still valid).
///
/// Both percentages are bounded to 0–100 and reach 100 only when every
/// counted type is complete; an empty catalog yields 0.
///
/// Documents whose type does not appear in the catalog are ignored.
///
/// # Examples
///
/// ```
/// use staffing_rules::config::DocumentTypeEntry;
/// use staffing_rules::rules::{DEFAULT_EXPIRY_WARNING_MONTHS, evaluate_compliance};
/// use chrono::NaiveDate;
///
/// let catalog: Vec<DocumentTypeEntry> = serde_yaml::from_str(r#"
/// - key: dbs_certificate
///   label: DBS Certificate
///   mandatory: true
/// - key: right_to_work
///   label: Right to Work
///   mandatory: true
/// "#).unwrap();
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let summary = evaluate_compliance(&[], &catalog, as_of, DEFAULT_EXPIRY_WARNING_MONTHS);
/// assert_eq!(summary.mandatory_progress_pct, 0);
/// assert_eq!(summary.per_document.len(), 2);
/// ```
pub fn evaluate_compliance(
    documents: &[Document],
    catalog: &[DocumentTypeEntry],
    as_of: NaiveDate,
    warning_months: u32,
) -> ComplianceSummary {
    let mut per_document = Vec::with_capacity(catalog.len());

    for entry in catalog {
        let mut best: Option<(&Document, DocumentComplianceStatus)> = None;
        for document in documents.iter().filter(|d| d.document_type == entry.key) {
            let status = evaluate_document(Some(document), as_of, warning_months).status;
            let better = match best {
                Some((_, current)) => precedence(status) < precedence(current),
                None => true,
            };
            if better {
                best = Some((document, status));
            }
        }

        let (status, document_id) = match best {
            Some((document, status)) => (status, Some(document.id.clone())),
            None => (DocumentComplianceStatus::Missing, None),
        };

        per_document.push(DocumentTypeCompliance {
            document_type: entry.key.clone(),
            label: entry.label.clone(),
            mandatory: entry.mandatory,
            status,
            document_id,
        });
    }

    let complete = |slot: &DocumentTypeCompliance| {
        matches!(
            slot.status,
            DocumentComplianceStatus::Verified | DocumentComplianceStatus::ExpiringSoon
        )
    };

    let mandatory_total = per_document.iter().filter(|s| s.mandatory).count();
    let mandatory_complete = per_document
        .iter()
        .filter(|s| s.mandatory && complete(s))
        .count();
    let overall_complete = per_document.iter().filter(|s| complete(s)).count();

    ComplianceSummary {
        mandatory_progress_pct: percent(mandatory_complete, mandatory_total),
        overall_progress_pct: percent(overall_complete, per_document.len()),
        per_document,
    }
}
