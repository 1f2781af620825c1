//! Field Visibility Resolver - which data fields apply to a document.

use serde::{Deserialize, Serialize};

use crate::domain::document::{
    CircularLetterSubject, Document, DocumentKind, DocumentType, OfficialLetterSubject,
};

/// Named flags for the data fields relevant to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldVisibilitySet {
    pub dispatch_date: bool,
    pub response_date: bool,
    pub tracking_code: bool,
    pub status: bool,
    pub finalization_date: bool,
    pub defect_flag: bool,
    pub individual_recipients: bool,
    pub selected_media: bool,
    pub selected_technical_reports: bool,
    pub selected_intelligence_reports: bool,
    pub selected_records: bool,
    pub selected_notices: bool,
}

impl FieldVisibilitySet {
    /// No field visible.
    pub const NONE: FieldVisibilitySet = FieldVisibilitySet {
        dispatch_date: false,
        response_date: false,
        tracking_code: false,
        status: false,
        finalization_date: false,
        defect_flag: false,
        individual_recipients: false,
        selected_media: false,
        selected_technical_reports: false,
        selected_intelligence_reports: false,
        selected_records: false,
        selected_notices: false,
    };

    /// Dispatch date, response date, tracking code, and status.
    pub fn envelope() -> Self {
        Self {
            dispatch_date: true,
            response_date: true,
            tracking_code: true,
            status: true,
            ..Self::NONE
        }
    }

    pub fn dispatch_only() -> Self {
        Self {
            dispatch_date: true,
            ..Self::NONE
        }
    }

    /// Names of the visible fields, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            (self.dispatch_date, "dispatchDate"),
            (self.response_date, "responseDate"),
            (self.tracking_code, "trackingCode"),
            (self.status, "status"),
            (self.finalization_date, "finalizationDate"),
            (self.defect_flag, "defectFlag"),
            (self.individual_recipients, "individualRecipients"),
            (self.selected_media, "selectedMedia"),
            (self.selected_technical_reports, "selectedTechnicalReports"),
            (self.selected_intelligence_reports, "selectedIntelligenceReports"),
            (self.selected_records, "selectedRecords"),
            (self.selected_notices, "selectedNotices"),
        ]
        .into_iter()
        .filter_map(|(visible, name)| visible.then_some(name))
        .collect()
    }

    pub fn len(&self) -> usize {
        self.field_names().len()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// True if the document carries a status, either directly or per recipient.
    pub fn tracks_status(&self) -> bool {
        self.status || self.individual_recipients
    }

    /// Human summary of the editable fields for update prompts.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "no recognized update fields".to_string()
        } else {
            self.field_names().join(", ")
        }
    }
}

/// Maps a document's (type, subject) to its visible fields.
pub struct FieldVisibilityResolver;

impl FieldVisibilityResolver {
    /// Resolves the visible fields of a document.
    ///
    /// Only the kind and the number of circular letter addressees matter;
    /// dates and payload values never change the result.
    pub fn resolve(document: &Document) -> FieldVisibilitySet {
        Self::resolve_for(document.kind, document.recipient_count())
    }

    /// Resolves the visible fields for a kind and addressee count.
    ///
    /// Rules are tried in order and the first match wins.
    pub fn resolve_for(kind: DocumentKind, recipient_count: usize) -> FieldVisibilitySet {
        if kind.document_type().is_report_like() {
            return FieldVisibilitySet {
                finalization_date: true,
                ..FieldVisibilitySet::NONE
            };
        }

        match kind {
            DocumentKind::Media(_) => FieldVisibilitySet {
                defect_flag: true,
                ..FieldVisibilitySet::NONE
            },
            DocumentKind::CircularOfficialLetter(_) if recipient_count > 1 => FieldVisibilitySet {
                individual_recipients: true,
                ..FieldVisibilitySet::NONE
            },
            DocumentKind::CircularOfficialLetter(CircularLetterSubject::Other) => {
                FieldVisibilitySet::dispatch_only()
            }
            DocumentKind::OfficialLetter(subject) if subject.is_forwarding() => {
                Self::forwarding_flags(subject)
            }
            DocumentKind::OfficialLetter(OfficialLetterSubject::NonComplianceNotice) => {
                FieldVisibilitySet {
                    selected_notices: true,
                    ..FieldVisibilitySet::NONE
                }
            }
            DocumentKind::OfficialLetter(OfficialLetterSubject::Other) => {
                FieldVisibilitySet::dispatch_only()
            }
            _ => FieldVisibilitySet::envelope(),
        }
    }

    fn forwarding_flags(subject: OfficialLetterSubject) -> FieldVisibilitySet {
        let mut flags = FieldVisibilitySet::NONE;
        for forwarded in subject.forwarded_types() {
            match forwarded {
                DocumentType::Media => flags.selected_media = true,
                DocumentType::TechnicalReport => flags.selected_technical_reports = true,
                DocumentType::IntelligenceReport => flags.selected_intelligence_reports = true,
                DocumentType::CircumstantialRecord => flags.selected_records = true,
                _ => {}
            }
        }
        flags
    }
}
