//! Precondition for saving a forwarding letter.

use thiserror::Error;

use crate::domain::document::{Document, DocumentType};
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};

/// Reasons a forwarding letter cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardingError {
    #[error("Referenced documents not found: {}", join_ids(.0))]
    MissingReferences(Vec<DocumentId>),

    #[error("Circumstantial records must be finalized before forwarding: {}", .0.join(", "))]
    UnfinalizedRecords(Vec<String>),

    #[error("Forwarding check failed: {0}")]
    Infrastructure(String),
}

impl ForwardingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ForwardingError::MissingReferences(_) => ErrorCode::DocumentNotFound,
            ForwardingError::UnfinalizedRecords(_) => ErrorCode::UnfinalizedRecord,
            ForwardingError::Infrastructure(_) => ErrorCode::RepositoryError,
        }
    }
}

impl From<DomainError> for ForwardingError {
    fn from(err: DomainError) -> Self {
        ForwardingError::Infrastructure(err.to_string())
    }
}

fn join_ids(ids: &[DocumentId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Checks that every circumstantial record a letter forwards is finalized.
pub struct ForwardingValidator;

impl ForwardingValidator {
    /// Validates a letter against the documents it references.
    ///
    /// `referenced` should hold every document the letter's references point
    /// to; extra documents are ignored.
    ///
    /// # Errors
    ///
    /// - `MissingReferences` if a referenced id is not in `referenced`
    /// - `UnfinalizedRecords` with the numbers of records lacking a
    ///   finalization date
    pub fn validate(letter: &Document, referenced: &[Document]) -> Result<(), ForwardingError> {
        let mut missing = Vec::new();
        let mut unfinalized = Vec::new();

        for id in letter.references.iter() {
            match referenced.iter().find(|doc| doc.id == *id) {
                None => {
                    if !missing.contains(id) {
                        missing.push(*id);
                    }
                }
                Some(doc) => {
                    if doc.document_type() == DocumentType::CircumstantialRecord
                        && doc.finalization_date.is_none()
                        && !unfinalized.contains(&doc.number)
                    {
                        unfinalized.push(doc.number.clone());
                    }
                }
            }
        }

        if !missing.is_empty() {
            return Err(ForwardingError::MissingReferences(missing));
        }
        if !unfinalized.is_empty() {
            return Err(ForwardingError::UnfinalizedRecords(unfinalized));
        }
        Ok(())
    }
}
