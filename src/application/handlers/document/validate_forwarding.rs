//! ValidateForwardingHandler - Command handler checking a forwarding letter before save.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::FeatureFlags;
use crate::domain::classification::{ForwardingError, ForwardingValidator};
use crate::domain::document::Document;
use crate::domain::foundation::DocumentId;
use crate::ports::DocumentRepository;

/// Command carrying the letter about to be saved.
#[derive(Debug, Clone)]
pub struct ValidateForwardingCommand {
    pub document: Document,
}

/// Handler for the forwarding precondition.
///
/// Loads every document the letter references and checks that forwarded
/// circumstantial records are finalized. With
/// `enforce_record_finalization` off, unfinalized records are logged and
/// accepted; missing references are always rejected.
pub struct ValidateForwardingHandler {
    documents: Arc<dyn DocumentRepository>,
    features: FeatureFlags,
}

impl ValidateForwardingHandler {
    pub fn new(documents: Arc<dyn DocumentRepository>, features: FeatureFlags) -> Self {
        Self {
            documents,
            features,
        }
    }

    pub async fn handle(&self, cmd: ValidateForwardingCommand) -> Result<(), ForwardingError> {
        let letter = &cmd.document;
        let ids: Vec<DocumentId> = letter.references.iter().copied().collect();
        if ids.is_empty() {
            return Ok(());
        }

        debug!(
            document_id = %letter.id,
            references = ids.len(),
            "Validating forwarding references"
        );
        let referenced = self.documents.find_many(&ids).await?;

        match ForwardingValidator::validate(letter, &referenced) {
            Ok(()) => Ok(()),
            Err(ForwardingError::UnfinalizedRecords(numbers))
                if !self.features.enforce_record_finalization =>
            {
                warn!(
                    document_id = %letter.id,
                    records = ?numbers,
                    "Forwarding unfinalized records; enforcement disabled"
                );
                Ok(())
            }
            Err(err) => {
                warn!(document_id = %letter.id, error = %err, "Forwarding validation failed");
                Err(err)
            }
        }
    }
}
