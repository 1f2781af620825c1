//! Closed vocabulary of document types and their subjects.
//!
//! Each document type owns its own subject enum, and [`DocumentKind`] pairs
//! a type with one of its subjects. A subject that belongs to another type
//! cannot be expressed, so type/subject mismatches are rejected at parse time
//! instead of being carried around as strings.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::{non_blank, ValidationError};

/// Generates a subject enum with labels and label lookup.
///
/// Every vocabulary must include an `Other` variant.
macro_rules! subject_vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Returns every subject of this vocabulary in display order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Returns the display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Looks a subject up by its display label (case-insensitive).
            pub fn from_label(raw: &str) -> Option<Self> {
                let wanted = raw.trim();
                Self::all()
                    .iter()
                    .copied()
                    .find(|subject| subject.label().eq_ignore_ascii_case(wanted))
            }

            /// Returns true for the free-text `Other` subject.
            pub fn is_other(&self) -> bool {
                matches!(self, $name::Other)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

subject_vocabulary! {
    /// Subjects of an Official Letter.
    OfficialLetterSubject {
        ForwardingOfMedia => "Forwarding of Media",
        ForwardingOfTechnicalReport => "Forwarding of Technical Report",
        ForwardingOfIntelligenceReport => "Forwarding of Intelligence Report",
        ForwardingOfCircumstantialRecord => "Forwarding of Circumstantial Record",
        ForwardingOfMediaAndTechnicalReport => "Forwarding of Media and Technical Report",
        RegistrationDataRequest => "Request for Registration Data",
        CallRecordsRequest => "Request for Call Records",
        NonComplianceNotice => "Non-Compliance Notice",
        Other => "Other",
    }
}

subject_vocabulary! {
    /// Subjects of a Circular Official Letter.
    CircularLetterSubject {
        RegistrationDataRequest => "Request for Registration Data",
        CallRecordsRequest => "Request for Call Records",
        DataPreservationRequest => "Request for Data Preservation",
        Other => "Other",
    }
}

subject_vocabulary! {
    /// Subjects of a Media item.
    MediaSubject {
        VideoRecording => "Video Recording",
        AudioRecording => "Audio Recording",
        Image => "Image",
        Other => "Other",
    }
}

subject_vocabulary! {
    /// Subjects of a Technical Report.
    TechnicalReportSubject {
        DataExtraction => "Data Extraction",
        ForensicAnalysis => "Forensic Analysis",
        Other => "Other",
    }
}

subject_vocabulary! {
    /// Subjects of an Intelligence Report.
    IntelligenceReportSubject {
        TargetQualification => "Target Qualification",
        LinkAnalysis => "Link Analysis",
        Other => "Other",
    }
}

subject_vocabulary! {
    /// Subjects of a Circumstantial Record.
    CircumstantialRecordSubject {
        FieldDiligence => "Field Diligence",
        Interview => "Interview",
        Other => "Other",
    }
}

subject_vocabulary! {
    /// Subjects of a Judicial Decision.
    JudicialDecisionSubject {
        DataDisclosureOrder => "Data Disclosure Order",
        InterceptionOrder => "Interception Order",
        SearchAndSeizureWarrant => "Search and Seizure Warrant",
        Other => "Other",
    }
}

impl OfficialLetterSubject {
    /// Returns the document types this subject forwards, if it is a forwarding subject.
    pub fn forwarded_types(&self) -> &'static [DocumentType] {
        match self {
            OfficialLetterSubject::ForwardingOfMedia => &[DocumentType::Media],
            OfficialLetterSubject::ForwardingOfTechnicalReport => &[DocumentType::TechnicalReport],
            OfficialLetterSubject::ForwardingOfIntelligenceReport => {
                &[DocumentType::IntelligenceReport]
            }
            OfficialLetterSubject::ForwardingOfCircumstantialRecord => {
                &[DocumentType::CircumstantialRecord]
            }
            OfficialLetterSubject::ForwardingOfMediaAndTechnicalReport => {
                &[DocumentType::Media, DocumentType::TechnicalReport]
            }
            _ => &[],
        }
    }

    /// Returns true if this subject forwards other documents.
    pub fn is_forwarding(&self) -> bool {
        !self.forwarded_types().is_empty()
    }
}

/// The closed set of document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    OfficialLetter,
    CircularOfficialLetter,
    Media,
    TechnicalReport,
    IntelligenceReport,
    CircumstantialRecord,
    JudicialDecision,
}

static TYPE_INDEX: Lazy<HashMap<String, DocumentType>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for document_type in DocumentType::all() {
        index.insert(document_type.label().to_lowercase(), *document_type);
        index.insert(document_type.key().to_string(), *document_type);
    }
    index
});

impl DocumentType {
    /// Returns all document types in display order.
    pub fn all() -> &'static [DocumentType] {
        &[
            DocumentType::OfficialLetter,
            DocumentType::CircularOfficialLetter,
            DocumentType::Media,
            DocumentType::TechnicalReport,
            DocumentType::IntelligenceReport,
            DocumentType::CircumstantialRecord,
            DocumentType::JudicialDecision,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::OfficialLetter => "Official Letter",
            DocumentType::CircularOfficialLetter => "Circular Official Letter",
            DocumentType::Media => "Media",
            DocumentType::TechnicalReport => "Technical Report",
            DocumentType::IntelligenceReport => "Intelligence Report",
            DocumentType::CircumstantialRecord => "Circumstantial Record",
            DocumentType::JudicialDecision => "Judicial Decision",
        }
    }

    /// Returns the snake_case key used in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            DocumentType::OfficialLetter => "official_letter",
            DocumentType::CircularOfficialLetter => "circular_official_letter",
            DocumentType::Media => "media",
            DocumentType::TechnicalReport => "technical_report",
            DocumentType::IntelligenceReport => "intelligence_report",
            DocumentType::CircumstantialRecord => "circumstantial_record",
            DocumentType::JudicialDecision => "judicial_decision",
        }
    }

    /// Looks a type up by display label or snake_case key (case-insensitive).
    pub fn from_label(raw: &str) -> Option<Self> {
        TYPE_INDEX.get(&raw.trim().to_lowercase()).copied()
    }

    /// Returns true for reports and records, which are produced rather than sent.
    pub fn is_report_like(&self) -> bool {
        matches!(
            self,
            DocumentType::TechnicalReport
                | DocumentType::IntelligenceReport
                | DocumentType::CircumstantialRecord
        )
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A document type paired with a subject from that type's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "subject", rename_all = "snake_case")]
pub enum DocumentKind {
    OfficialLetter(OfficialLetterSubject),
    CircularOfficialLetter(CircularLetterSubject),
    Media(MediaSubject),
    TechnicalReport(TechnicalReportSubject),
    IntelligenceReport(IntelligenceReportSubject),
    CircumstantialRecord(CircumstantialRecordSubject),
    JudicialDecision(JudicialDecisionSubject),
}

impl DocumentKind {
    /// Returns the document type.
    pub fn document_type(&self) -> DocumentType {
        match self {
            DocumentKind::OfficialLetter(_) => DocumentType::OfficialLetter,
            DocumentKind::CircularOfficialLetter(_) => DocumentType::CircularOfficialLetter,
            DocumentKind::Media(_) => DocumentType::Media,
            DocumentKind::TechnicalReport(_) => DocumentType::TechnicalReport,
            DocumentKind::IntelligenceReport(_) => DocumentType::IntelligenceReport,
            DocumentKind::CircumstantialRecord(_) => DocumentType::CircumstantialRecord,
            DocumentKind::JudicialDecision(_) => DocumentType::JudicialDecision,
        }
    }

    /// Returns the subject's display label.
    pub fn subject_label(&self) -> &'static str {
        match self {
            DocumentKind::OfficialLetter(s) => s.label(),
            DocumentKind::CircularOfficialLetter(s) => s.label(),
            DocumentKind::Media(s) => s.label(),
            DocumentKind::TechnicalReport(s) => s.label(),
            DocumentKind::IntelligenceReport(s) => s.label(),
            DocumentKind::CircumstantialRecord(s) => s.label(),
            DocumentKind::JudicialDecision(s) => s.label(),
        }
    }

    /// Returns true if the subject is the free-text `Other`.
    pub fn is_other_subject(&self) -> bool {
        match self {
            DocumentKind::OfficialLetter(s) => s.is_other(),
            DocumentKind::CircularOfficialLetter(s) => s.is_other(),
            DocumentKind::Media(s) => s.is_other(),
            DocumentKind::TechnicalReport(s) => s.is_other(),
            DocumentKind::IntelligenceReport(s) => s.is_other(),
            DocumentKind::CircumstantialRecord(s) => s.is_other(),
            DocumentKind::JudicialDecision(s) => s.is_other(),
        }
    }

    /// Returns the `Other` kind for a type.
    pub fn other(document_type: DocumentType) -> Self {
        match document_type {
            DocumentType::OfficialLetter => {
                DocumentKind::OfficialLetter(OfficialLetterSubject::Other)
            }
            DocumentType::CircularOfficialLetter => {
                DocumentKind::CircularOfficialLetter(CircularLetterSubject::Other)
            }
            DocumentType::Media => DocumentKind::Media(MediaSubject::Other),
            DocumentType::TechnicalReport => {
                DocumentKind::TechnicalReport(TechnicalReportSubject::Other)
            }
            DocumentType::IntelligenceReport => {
                DocumentKind::IntelligenceReport(IntelligenceReportSubject::Other)
            }
            DocumentType::CircumstantialRecord => {
                DocumentKind::CircumstantialRecord(CircumstantialRecordSubject::Other)
            }
            DocumentType::JudicialDecision => {
                DocumentKind::JudicialDecision(JudicialDecisionSubject::Other)
            }
        }
    }

    /// Lists every valid kind for a document type.
    pub fn vocabulary(document_type: DocumentType) -> Vec<DocumentKind> {
        match document_type {
            DocumentType::OfficialLetter => OfficialLetterSubject::all()
                .iter()
                .map(|s| DocumentKind::OfficialLetter(*s))
                .collect(),
            DocumentType::CircularOfficialLetter => CircularLetterSubject::all()
                .iter()
                .map(|s| DocumentKind::CircularOfficialLetter(*s))
                .collect(),
            DocumentType::Media => MediaSubject::all()
                .iter()
                .map(|s| DocumentKind::Media(*s))
                .collect(),
            DocumentType::TechnicalReport => TechnicalReportSubject::all()
                .iter()
                .map(|s| DocumentKind::TechnicalReport(*s))
                .collect(),
            DocumentType::IntelligenceReport => IntelligenceReportSubject::all()
                .iter()
                .map(|s| DocumentKind::IntelligenceReport(*s))
                .collect(),
            DocumentType::CircumstantialRecord => CircumstantialRecordSubject::all()
                .iter()
                .map(|s| DocumentKind::CircumstantialRecord(*s))
                .collect(),
            DocumentType::JudicialDecision => JudicialDecisionSubject::all()
                .iter()
                .map(|s| DocumentKind::JudicialDecision(*s))
                .collect(),
        }
    }

    /// Lists the whole closed vocabulary, every type with every subject.
    pub fn all() -> Vec<DocumentKind> {
        DocumentType::all()
            .iter()
            .flat_map(|t| Self::vocabulary(*t))
            .collect()
    }

    /// Parses a (type, subject) pair of display labels.
    ///
    /// # Errors
    ///
    /// - `UnknownDocumentType` if the type label is not recognised
    /// - `SubjectNotAllowed` if the subject is not in that type's vocabulary
    pub fn parse(type_label: &str, subject_label: &str) -> Result<Self, ValidationError> {
        let document_type = DocumentType::from_label(type_label)
            .ok_or_else(|| ValidationError::UnknownDocumentType(type_label.trim().to_string()))?;

        Self::vocabulary(document_type)
            .into_iter()
            .find(|kind| kind.subject_label().eq_ignore_ascii_case(subject_label.trim()))
            .ok_or_else(|| {
                ValidationError::subject_not_allowed(document_type.label(), subject_label.trim())
            })
    }

    /// Lenient parse for legacy records.
    ///
    /// An unrecognised subject maps to `Other` and its raw text is returned as
    /// the subject-other override. An unrecognised type, a blank subject, or a
    /// bare "Other" with no text to carry yields `None`, so every returned
    /// pair passes `Document::validate`.
    pub fn from_legacy(type_label: &str, subject_label: &str) -> Option<(Self, Option<String>)> {
        let document_type = DocumentType::from_label(type_label)?;
        let subject = non_blank(subject_label)?;
        match Self::parse(document_type.label(), subject) {
            Ok(kind) if kind.is_other_subject() => None,
            Ok(kind) => Some((kind, None)),
            Err(_) => Some((Self::other(document_type), Some(subject.to_string()))),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.document_type(), self.subject_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_non_empty_vocabulary_with_other() {
        for document_type in DocumentType::all() {
            let vocabulary = DocumentKind::vocabulary(*document_type);
            assert!(!vocabulary.is_empty());
            assert!(vocabulary.iter().any(|k| k.is_other_subject()));
            assert!(vocabulary.iter().all(|k| k.document_type() == *document_type));
        }
    }

    #[test]
    fn parse_accepts_labels_case_insensitively() {
        let kind = DocumentKind::parse("official letter", "non-compliance notice").unwrap();
        assert_eq!(
            kind,
            DocumentKind::OfficialLetter(OfficialLetterSubject::NonComplianceNotice)
        );
    }

    #[test]
    fn parse_accepts_snake_case_type_keys() {
        let kind = DocumentKind::parse("circular_official_letter", "Other").unwrap();
        assert_eq!(
            kind,
            DocumentKind::CircularOfficialLetter(CircularLetterSubject::Other)
        );
    }

    #[test]
    fn parse_rejects_subject_from_another_type() {
        let err = DocumentKind::parse("Media", "Non-Compliance Notice").unwrap_err();
        assert_eq!(
            err,
            ValidationError::subject_not_allowed("Media", "Non-Compliance Notice")
        );
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let err = DocumentKind::parse("Memo", "Other").unwrap_err();
        assert_eq!(err, ValidationError::UnknownDocumentType("Memo".to_string()));
    }

    #[test]
    fn legacy_subject_falls_back_to_other_with_override() {
        let (kind, other) = DocumentKind::from_legacy("Official Letter", "Courtesy Reply").unwrap();
        assert_eq!(kind, DocumentKind::OfficialLetter(OfficialLetterSubject::Other));
        assert_eq!(other.as_deref(), Some("Courtesy Reply"));
    }

    #[test]
    fn legacy_known_subject_parses_cleanly() {
        let (kind, other) = DocumentKind::from_legacy("Media", "Image").unwrap();
        assert_eq!(kind, DocumentKind::Media(MediaSubject::Image));
        assert_eq!(other, None);
    }

    #[test]
    fn legacy_blank_subject_is_none() {
        assert!(DocumentKind::from_legacy("Official Letter", "").is_none());
        assert!(DocumentKind::from_legacy("Media", "   ").is_none());
        assert!(DocumentKind::from_legacy("Media", "other").is_none());
    }

    #[test]
    fn legacy_other_text_is_trimmed() {
        let (_, other) = DocumentKind::from_legacy("Media", "  Drone footage ").unwrap();
        assert_eq!(other.as_deref(), Some("Drone footage"));
    }

    #[test]
    fn legacy_unknown_type_is_none() {
        assert!(DocumentKind::from_legacy("Fax", "Other").is_none());
    }

    #[test]
    fn forwarding_of_media_and_report_forwards_two_types() {
        assert_eq!(
            OfficialLetterSubject::ForwardingOfMediaAndTechnicalReport.forwarded_types(),
            &[DocumentType::Media, DocumentType::TechnicalReport]
        );
        assert!(!OfficialLetterSubject::NonComplianceNotice.is_forwarding());
    }

    #[test]
    fn serializes_as_tagged_type_and_subject() {
        let kind = DocumentKind::OfficialLetter(OfficialLetterSubject::ForwardingOfMedia);
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "official_letter", "subject": "forwarding_of_media"})
        );
    }

    #[test]
    fn whole_vocabulary_is_enumerable() {
        let total: usize = DocumentType::all()
            .iter()
            .map(|t| DocumentKind::vocabulary(*t).len())
            .sum();
        assert_eq!(DocumentKind::all().len(), total);
    }
}
