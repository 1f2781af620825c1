//! Document record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    parse_addressees, DocumentKind, DocumentType, JudicialRuling, MediaPayload, Recipient,
    Rectification, ResearchEntry, SelectedReferences, Tracking,
};
use crate::domain::foundation::{lenient_date, non_blank, DemandId, DocumentId, ValidationError};

/// An official artifact belonging to exactly one demand.
///
/// The resolvers read documents as snapshots and never mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub demand_id: DemandId,
    pub kind: DocumentKind,
    /// Free-text subject, only meaningful when the subject is `Other`.
    #[serde(default)]
    pub subject_other: Option<String>,
    pub number: String,
    /// Addressee line as typed; circular letters may list several names.
    #[serde(default)]
    pub recipient: String,
    #[serde(default, with = "lenient_date")]
    pub dispatch_date: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub response_date: Option<NaiveDate>,
    #[serde(default)]
    pub tracking: Tracking,
    /// Stored flag; the demand rollup reads this value as-is.
    #[serde(default)]
    pub responded: bool,
    #[serde(default)]
    pub media: Option<MediaPayload>,
    #[serde(default)]
    pub judicial: Option<JudicialRuling>,
    #[serde(default, with = "lenient_date")]
    pub finalization_date: Option<NaiveDate>,
    #[serde(default)]
    pub research: Vec<ResearchEntry>,
    #[serde(default)]
    pub references: SelectedReferences,
    /// Explicit per-addressee records for circular letters.
    #[serde(default)]
    pub recipients: Vec<Recipient>,
    /// Amendments to the judicial ruling, oldest first.
    #[serde(default)]
    pub rectifications: Vec<Rectification>,
}

impl Document {
    /// Creates a document with no dates, payload, or references.
    pub fn new(demand_id: DemandId, kind: DocumentKind, number: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            demand_id,
            kind,
            subject_other: None,
            number: number.into(),
            recipient: String::new(),
            dispatch_date: None,
            response_date: None,
            tracking: Tracking::Unset,
            responded: false,
            media: None,
            judicial: None,
            finalization_date: None,
            research: Vec::new(),
            references: SelectedReferences::default(),
            recipients: Vec::new(),
            rectifications: Vec::new(),
        }
    }

    pub fn with_subject_other(mut self, text: impl Into<String>) -> Self {
        self.subject_other = Some(text.into());
        self
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn with_dispatch_date(mut self, date: NaiveDate) -> Self {
        self.dispatch_date = Some(date);
        self
    }

    pub fn with_response_date(mut self, date: NaiveDate) -> Self {
        self.response_date = Some(date);
        self
    }

    pub fn with_tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn with_responded(mut self, responded: bool) -> Self {
        self.responded = responded;
        self
    }

    pub fn with_media(mut self, media: MediaPayload) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_judicial(mut self, ruling: JudicialRuling) -> Self {
        self.judicial = Some(ruling);
        self
    }

    pub fn with_finalization_date(mut self, date: NaiveDate) -> Self {
        self.finalization_date = Some(date);
        self
    }

    pub fn with_references(mut self, references: SelectedReferences) -> Self {
        self.references = references;
        self
    }

    pub fn with_recipients(mut self, recipients: Vec<Recipient>) -> Self {
        self.recipients = recipients;
        self
    }

    pub fn with_rectification(mut self, rectification: Rectification) -> Self {
        self.rectifications.push(rectification);
        self
    }

    pub fn document_type(&self) -> DocumentType {
        self.kind.document_type()
    }

    /// Subject as shown to users: the free-text override for `Other`.
    pub fn subject_display(&self) -> &str {
        if self.kind.is_other_subject() {
            if let Some(text) = self.subject_other.as_deref().and_then(non_blank) {
                return text;
            }
        }
        self.kind.subject_label()
    }

    /// Returns the addressees of a circular letter.
    ///
    /// Explicit recipient records win; otherwise one undated recipient is
    /// synthesized per name parsed from the addressee line. Other document
    /// types have no individual recipients.
    pub fn effective_recipients(&self) -> Vec<Recipient> {
        if self.document_type() != DocumentType::CircularOfficialLetter {
            return Vec::new();
        }
        if !self.recipients.is_empty() {
            return self.recipients.clone();
        }
        parse_addressees(&self.recipient)
            .into_iter()
            .map(Recipient::new)
            .collect()
    }

    /// Number of addressees a circular letter is sent to.
    pub fn recipient_count(&self) -> usize {
        if self.document_type() != DocumentType::CircularOfficialLetter {
            return 0;
        }
        if !self.recipients.is_empty() {
            self.recipients.len()
        } else {
            parse_addressees(&self.recipient).len()
        }
    }

    /// True for a circular letter tracked per addressee.
    ///
    /// A circular letter with a single addressee behaves like a plain letter.
    pub fn is_multi_recipient(&self) -> bool {
        self.recipient_count() > 1
    }

    /// Checks the snapshot invariants.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the document number is blank
    /// - `UnexpectedSubjectOther` if free text is given for a listed subject
    /// - `MissingSubjectOther` if the subject is `Other` without free text
    pub fn validate(&self) -> Result<(), ValidationError> {
        if non_blank(&self.number).is_none() {
            return Err(ValidationError::empty_field("number"));
        }

        let has_other_text = self.subject_other.as_deref().and_then(non_blank).is_some();
        match (self.kind.is_other_subject(), has_other_text) {
            (false, true) => Err(ValidationError::UnexpectedSubjectOther),
            (true, false) => Err(ValidationError::MissingSubjectOther),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{CircularLetterSubject, MediaSubject, OfficialLetterSubject};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn circular(recipient: &str) -> Document {
        Document::new(
            DemandId::new(),
            DocumentKind::CircularOfficialLetter(CircularLetterSubject::RegistrationDataRequest),
            "OF-12/2025",
        )
        .with_recipient(recipient)
    }

    #[test]
    fn circular_recipients_are_parsed_from_addressee_line() {
        let doc = circular("Bank A; Bank B");
        let recipients = doc.effective_recipients();
        assert_eq!(recipients.len(), 2);
        assert_eq!(recipients[0].name, "Bank A");
        assert!(recipients.iter().all(|r| r.dispatch_date.is_none()));
        assert!(doc.is_multi_recipient());
    }

    #[test]
    fn explicit_recipients_take_precedence() {
        let doc = circular("Bank A; Bank B; Bank C")
            .with_recipients(vec![Recipient::new("Bank A").with_dispatch_date(ymd(2025, 8, 1))]);
        assert_eq!(doc.recipient_count(), 1);
        assert!(!doc.is_multi_recipient());
        assert_eq!(doc.effective_recipients()[0].dispatch_date, Some(ymd(2025, 8, 1)));
    }

    #[test]
    fn single_addressee_circular_is_not_multi_recipient() {
        assert!(!circular("Bank A").is_multi_recipient());
    }

    #[test]
    fn plain_letters_have_no_individual_recipients() {
        let doc = Document::new(
            DemandId::new(),
            DocumentKind::OfficialLetter(OfficialLetterSubject::RegistrationDataRequest),
            "OF-1",
        )
        .with_recipient("Bank A; Bank B");
        assert!(doc.effective_recipients().is_empty());
        assert!(!doc.is_multi_recipient());
    }

    #[test]
    fn subject_display_prefers_other_text() {
        let doc = Document::new(
            DemandId::new(),
            DocumentKind::OfficialLetter(OfficialLetterSubject::Other),
            "OF-2",
        )
        .with_subject_other("Courtesy reply");
        assert_eq!(doc.subject_display(), "Courtesy reply");
    }

    #[test]
    fn subject_display_uses_label_for_listed_subjects() {
        let doc = Document::new(DemandId::new(), DocumentKind::Media(MediaSubject::Image), "M-1");
        assert_eq!(doc.subject_display(), "Image");
    }

    #[test]
    fn validate_rejects_blank_number() {
        let doc = Document::new(DemandId::new(), DocumentKind::Media(MediaSubject::Image), "  ");
        assert_eq!(doc.validate(), Err(ValidationError::empty_field("number")));
    }

    #[test]
    fn validate_rejects_other_text_on_listed_subject() {
        let doc = Document::new(DemandId::new(), DocumentKind::Media(MediaSubject::Image), "M-1")
            .with_subject_other("stray");
        assert_eq!(doc.validate(), Err(ValidationError::UnexpectedSubjectOther));
    }

    #[test]
    fn validate_requires_other_text_for_other() {
        let doc = Document::new(
            DemandId::new(),
            DocumentKind::OfficialLetter(OfficialLetterSubject::Other),
            "OF-3",
        );
        assert_eq!(doc.validate(), Err(ValidationError::MissingSubjectOther));
        assert!(doc.with_subject_other("Courtesy reply").validate().is_ok());
    }

    #[test]
    fn legacy_kinds_build_valid_documents() {
        for (type_label, subject) in [
            ("Official Letter", "Courtesy Reply"),
            ("Official Letter", "Non-Compliance Notice"),
            ("Media", "Image"),
            ("Judicial Decision", "Habeas data"),
        ] {
            let (kind, other) = DocumentKind::from_legacy(type_label, subject).unwrap();
            let mut doc = Document::new(DemandId::new(), kind, "LEG-1");
            if let Some(text) = other {
                doc = doc.with_subject_other(text);
            }
            assert_eq!(doc.validate(), Ok(()), "{type_label} / {subject}");
        }
    }

    #[test]
    fn deserializes_record_with_tagged_kind() {
        let json = serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "demand_id": "550e8400-e29b-41d4-a716-446655440001",
            "kind": {"type": "official_letter", "subject": "forwarding_of_everything"},
            "number": "OF-1"
        });
        assert!(serde_json::from_value::<Document>(json).is_err());

        let json = serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "demand_id": "550e8400-e29b-41d4-a716-446655440001",
            "kind": {"type": "official_letter", "subject": "registration_data_request"},
            "number": "OF-1",
            "dispatch_date": "2025-08-01",
            "response_date": ""
        });
        let doc: Document = serde_json::from_value(json).unwrap();
        assert_eq!(
            doc.kind,
            DocumentKind::OfficialLetter(OfficialLetterSubject::RegistrationDataRequest)
        );
        assert_eq!(doc.dispatch_date, Some(ymd(2025, 8, 1)));
        assert_eq!(doc.response_date, None);
        assert!(!doc.responded);
    }
}
