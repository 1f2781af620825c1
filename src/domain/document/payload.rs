//! Type-specific document payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{lenient_date, DocumentId};

/// Evidence file details carried by a Media document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaPayload {
    pub hash: Option<String>,
    pub size: Option<String>,
    pub password: Option<String>,
    /// Set when the delivered media is damaged or unreadable.
    #[serde(default)]
    pub defective: bool,
}

/// Authority, court, and signature date of a judicial decision.
///
/// Used both for the original decision and for each amendment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JudicialRuling {
    pub authority: String,
    pub court: String,
    #[serde(default, with = "lenient_date")]
    pub signature_date: Option<NaiveDate>,
}

impl JudicialRuling {
    pub fn new(
        authority: impl Into<String>,
        court: impl Into<String>,
        signature_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            authority: authority.into(),
            court: court.into(),
            signature_date,
        }
    }
}

/// An amendment to a judicial decision's ruling.
pub type Rectification = JudicialRuling;

/// Descriptive research attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchEntry {
    pub kind: String,
    pub identifier: String,
    pub note: Option<String>,
}

/// Other documents referenced by a forwarding letter or a non-compliance notice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectedReferences {
    #[serde(default)]
    pub media: Vec<DocumentId>,
    #[serde(default)]
    pub technical_reports: Vec<DocumentId>,
    #[serde(default)]
    pub intelligence_reports: Vec<DocumentId>,
    #[serde(default)]
    pub records: Vec<DocumentId>,
    /// Earlier forwarding letters a non-compliance notice refers to.
    #[serde(default)]
    pub notices: Vec<DocumentId>,
}

impl SelectedReferences {
    /// Returns true if nothing is referenced.
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
            && self.technical_reports.is_empty()
            && self.intelligence_reports.is_empty()
            && self.records.is_empty()
            && self.notices.is_empty()
    }

    /// Iterates every referenced id in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentId> {
        self.media
            .iter()
            .chain(&self.technical_reports)
            .chain(&self.intelligence_reports)
            .chain(&self.records)
            .chain(&self.notices)
    }
}
