//! Recipient Status Resolver.

use chrono::NaiveDate;

use crate::domain::document::{Recipient, RecipientStatus};

/// Classifies one addressee from its dispatch and response dates.
pub struct RecipientStatusResolver;

impl RecipientStatusResolver {
    pub fn resolve(recipient: &Recipient) -> RecipientStatus {
        Self::classify(recipient.dispatch_date, recipient.response_date)
    }

    /// Shared date rule for recipients and single-addressee documents.
    ///
    /// A response without a dispatch is still `NotSent`: nothing counts as
    /// answered before it was sent.
    pub fn classify(dispatch: Option<NaiveDate>, response: Option<NaiveDate>) -> RecipientStatus {
        match (dispatch, response) {
            (None, _) => RecipientStatus::NotSent,
            (Some(_), Some(_)) => RecipientStatus::Answered,
            (Some(_), None) => RecipientStatus::Pending,
        }
    }
}
