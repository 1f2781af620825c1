//! Document Status Classifier.

use serde::{Deserialize, Serialize};

use super::{FieldVisibilityResolver, RecipientStatusResolver};
use crate::domain::document::{Document, DocumentStatus, RecipientStatus};

/// Status of one addressee, for per-recipient views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientStatusEntry {
    pub name: String,
    pub status: RecipientStatus,
}

/// Computes the overall status of a document.
pub struct DocumentStatusClassifier;

impl DocumentStatusClassifier {
    /// Resolves a document's status.
    ///
    /// - Types that carry no status resolve to `NoStatus`.
    /// - Circular letters with several addressees aggregate their recipients.
    /// - Everything else uses the document's own dates.
    pub fn resolve(document: &Document) -> DocumentStatus {
        let visible = FieldVisibilityResolver::resolve(document);
        if !visible.tracks_status() {
            return DocumentStatus::NoStatus;
        }

        if document.is_multi_recipient() {
            let statuses = document
                .effective_recipients()
                .iter()
                .map(RecipientStatusResolver::resolve)
                .collect::<Vec<_>>();
            if let Some(status) = Self::aggregate(statuses) {
                return status.into();
            }
        }

        RecipientStatusResolver::classify(document.dispatch_date, document.response_date).into()
    }

    /// Folds recipient statuses into one.
    ///
    /// Precedence is `Pending > NotSent > Answered`: any pending recipient
    /// makes the whole letter pending, otherwise any unsent one makes it
    /// unsent, and only a fully answered letter is answered. Returns `None`
    /// for an empty list.
    pub fn aggregate<I>(statuses: I) -> Option<RecipientStatus>
    where
        I: IntoIterator<Item = RecipientStatus>,
    {
        let mut seen_any = false;
        let mut any_not_sent = false;
        for status in statuses {
            seen_any = true;
            match status {
                RecipientStatus::Pending => return Some(RecipientStatus::Pending),
                RecipientStatus::NotSent => any_not_sent = true,
                RecipientStatus::Answered => {}
            }
        }

        match (seen_any, any_not_sent) {
            (false, _) => None,
            (true, true) => Some(RecipientStatus::NotSent),
            (true, false) => Some(RecipientStatus::Answered),
        }
    }

    /// Per-addressee statuses of a circular letter, in addressee order.
    pub fn recipient_statuses(document: &Document) -> Vec<RecipientStatusEntry> {
        document
            .effective_recipients()
            .into_iter()
            .map(|recipient| RecipientStatusEntry {
                status: RecipientStatusResolver::resolve(&recipient),
                name: recipient.name,
            })
            .collect()
    }

    /// Whether the document counts as answered according to its dates.
    ///
    /// This is what the stored `responded` flag is expected to mirror. The
    /// demand rollup still reads the stored flag.
    pub fn derived_responded(document: &Document) -> bool {
        if document.is_multi_recipient() {
            let statuses = document
                .effective_recipients()
                .iter()
                .map(RecipientStatusResolver::resolve)
                .collect::<Vec<_>>();
            return Self::aggregate(statuses) == Some(RecipientStatus::Answered);
        }
        document.response_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{
        CircularLetterSubject, DocumentKind, MediaSubject, OfficialLetterSubject, Recipient,
        TechnicalReportSubject,
    };
    use crate::domain::foundation::DemandId;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn ymd(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn recipient_with(status: RecipientStatus, name: &str) -> Recipient {
        match status {
            RecipientStatus::NotSent => Recipient::new(name),
            RecipientStatus::Pending => Recipient::new(name).with_dispatch_date(ymd(1)),
            RecipientStatus::Answered => Recipient::new(name)
                .with_dispatch_date(ymd(1))
                .with_response_date(ymd(5)),
        }
    }

    fn circular_with(statuses: &[RecipientStatus]) -> Document {
        let recipients = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| recipient_with(*s, &format!("Addressee {}", i)))
            .collect();
        Document::new(
            DemandId::new(),
            DocumentKind::CircularOfficialLetter(CircularLetterSubject::RegistrationDataRequest),
            "OC-1",
        )
        .with_recipients(recipients)
    }

    fn plain_letter() -> Document {
        Document::new(
            DemandId::new(),
            DocumentKind::OfficialLetter(OfficialLetterSubject::RegistrationDataRequest),
            "OF-1",
        )
    }

    #[test]
    fn media_has_no_status() {
        let doc = Document::new(DemandId::new(), DocumentKind::Media(MediaSubject::Image), "M-1")
            .with_dispatch_date(ymd(1));
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::NoStatus);
    }

    #[test]
    fn reports_have_no_status() {
        let doc = Document::new(
            DemandId::new(),
            DocumentKind::TechnicalReport(TechnicalReportSubject::ForensicAnalysis),
            "RT-1",
        );
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::NoStatus);
    }

    #[test]
    fn forwarding_letters_have_no_status() {
        let doc = Document::new(
            DemandId::new(),
            DocumentKind::OfficialLetter(OfficialLetterSubject::ForwardingOfMedia),
            "OF-9",
        )
        .with_dispatch_date(ymd(1));
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::NoStatus);
    }

    #[test]
    fn plain_letter_follows_its_own_dates() {
        assert_eq!(DocumentStatusClassifier::resolve(&plain_letter()), DocumentStatus::NotSent);
        assert_eq!(
            DocumentStatusClassifier::resolve(&plain_letter().with_dispatch_date(ymd(1))),
            DocumentStatus::Pending
        );
        assert_eq!(
            DocumentStatusClassifier::resolve(
                &plain_letter()
                    .with_dispatch_date(ymd(1))
                    .with_response_date(ymd(3))
            ),
            DocumentStatus::Answered
        );
    }

    #[test]
    fn pending_dominates_mixed_recipients() {
        let doc = circular_with(&[
            RecipientStatus::Answered,
            RecipientStatus::Pending,
            RecipientStatus::NotSent,
        ]);
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::Pending);
    }

    #[test]
    fn not_sent_beats_answered() {
        let doc = circular_with(&[RecipientStatus::Answered, RecipientStatus::NotSent]);
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::NotSent);
    }

    #[test]
    fn all_answered_is_answered() {
        let doc = circular_with(&[RecipientStatus::Answered, RecipientStatus::Answered]);
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::Answered);
    }

    #[test]
    fn single_recipient_circular_uses_document_dates() {
        let doc = circular_with(&[RecipientStatus::Answered]).with_dispatch_date(ymd(2));
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::Pending);
    }

    #[test]
    fn parsed_addressees_without_records_are_not_sent() {
        let doc = Document::new(
            DemandId::new(),
            DocumentKind::CircularOfficialLetter(CircularLetterSubject::Other),
            "OC-2",
        )
        .with_recipient("Bank A; Bank B")
        .with_dispatch_date(ymd(1));
        assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::NotSent);
    }

    #[test]
    fn aggregate_of_nothing_is_none() {
        assert_eq!(DocumentStatusClassifier::aggregate(Vec::new()), None);
    }

    #[test]
    fn recipient_statuses_keep_order() {
        let doc = circular_with(&[RecipientStatus::Pending, RecipientStatus::Answered]);
        let entries = DocumentStatusClassifier::recipient_statuses(&doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Addressee 0");
        assert_eq!(entries[0].status, RecipientStatus::Pending);
        assert_eq!(entries[1].status, RecipientStatus::Answered);
    }

    #[test]
    fn derived_responded_requires_every_recipient() {
        let partial = circular_with(&[RecipientStatus::Answered, RecipientStatus::Pending]);
        let full = circular_with(&[RecipientStatus::Answered, RecipientStatus::Answered]);
        assert!(!DocumentStatusClassifier::derived_responded(&partial));
        assert!(DocumentStatusClassifier::derived_responded(&full));
        assert!(DocumentStatusClassifier::derived_responded(
            &plain_letter().with_response_date(ymd(4))
        ));
    }

    fn any_recipient_status() -> impl Strategy<Value = RecipientStatus> {
        prop_oneof![
            Just(RecipientStatus::NotSent),
            Just(RecipientStatus::Pending),
            Just(RecipientStatus::Answered),
        ]
    }

    proptest! {
        #[test]
        fn any_pending_recipient_makes_letter_pending(
            mut statuses in proptest::collection::vec(any_recipient_status(), 1..8),
            at in 0usize..8,
        ) {
            let at = at % (statuses.len() + 1);
            statuses.insert(at, RecipientStatus::Pending);
            let doc = circular_with(&statuses);
            prop_assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::Pending);
        }

        #[test]
        fn all_answered_recipients_make_letter_answered(count in 2usize..8) {
            let doc = circular_with(&vec![RecipientStatus::Answered; count]);
            prop_assert_eq!(DocumentStatusClassifier::resolve(&doc), DocumentStatus::Answered);
        }
    }
}
