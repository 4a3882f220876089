//! Document readiness
//!
//! Summarizes a carer's checklist before it is shared with an employer.

use serde::Serialize;

use crate::core::models::{DocumentStatus, TrackedDocument};

/// How many documents are ready to share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessSummary {
    /// Documents with status `complete`
    pub complete: usize,
    /// All tracked documents
    pub total: usize,
}

impl ReadinessSummary {
    /// Count complete documents
    #[must_use]
    pub fn from_documents(documents: &[TrackedDocument]) -> Self {
        Self {
            complete: documents.iter().filter(|d| d.status == DocumentStatus::Complete).count(),
            total: documents.len(),
        }
    }

    /// Documents still needing attention
    #[must_use]
    pub const fn outstanding(&self) -> usize {
        self.total - self.complete
    }

    /// Whether every document is complete
    #[must_use]
    pub const fn all_ready(&self) -> bool {
        self.complete == self.total
    }
}

/// Sort most urgent first; equal statuses keep their order
pub fn sort_by_urgency(documents: &mut [TrackedDocument]) {
    documents.sort_by_key(|d| d.status.urgency());
}

/// Documents that are missing or expiring, in input order
#[must_use]
pub fn urgent_documents(documents: &[TrackedDocument]) -> Vec<&TrackedDocument> {
    documents.iter().filter(|d| d.status.needs_attention()).collect()
}
