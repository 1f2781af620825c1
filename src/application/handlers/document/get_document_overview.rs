//! GetDocumentOverviewHandler - Query handler for a document's derived view.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::classification::{
    DocumentStatusClassifier, FieldVisibilityResolver, FieldVisibilitySet, RecipientStatusEntry,
    VersionChain, VersionChainResolver,
};
use crate::domain::document::{Document, DocumentError, DocumentStatus, DocumentType};
use crate::domain::foundation::DocumentId;
use crate::ports::DocumentRepository;

/// Query for one document's overview.
#[derive(Debug, Clone)]
pub struct GetDocumentOverviewQuery {
    pub document_id: DocumentId,
}

/// Everything an update form or listing needs to render a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOverview {
    pub document_id: DocumentId,
    pub document_type: DocumentType,
    pub subject: String,
    pub visible_fields: FieldVisibilitySet,
    pub status: DocumentStatus,
    /// Per-addressee statuses; empty unless the document is a multi-recipient letter.
    pub recipients: Vec<RecipientStatusEntry>,
    pub version_chain: VersionChain,
    /// Stored `responded` flag disagrees with the recipients' response dates.
    pub responded_mismatch: bool,
}

impl DocumentOverview {
    pub fn from_document(document: &Document) -> Self {
        let recipients = if document.is_multi_recipient() {
            DocumentStatusClassifier::recipient_statuses(document)
        } else {
            Vec::new()
        };
        let responded_mismatch = document.is_multi_recipient()
            && document.responded != DocumentStatusClassifier::derived_responded(document);

        Self {
            document_id: document.id,
            document_type: document.document_type(),
            subject: document.subject_display().to_string(),
            visible_fields: FieldVisibilityResolver::resolve(document),
            status: DocumentStatusClassifier::resolve(document),
            recipients,
            version_chain: VersionChainResolver::resolve(document),
            responded_mismatch,
        }
    }
}

/// Handler for building a document overview.
pub struct GetDocumentOverviewHandler {
    documents: Arc<dyn DocumentRepository>,
}

impl GetDocumentOverviewHandler {
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }

    pub async fn handle(
        &self,
        query: GetDocumentOverviewQuery,
    ) -> Result<DocumentOverview, DocumentError> {
        let document = self
            .documents
            .find_by_id(&query.document_id)
            .await?
            .ok_or_else(|| DocumentError::not_found(query.document_id))?;

        debug!(
            document_id = %document.id,
            document_type = %document.document_type(),
            "Building document overview"
        );

        let overview = DocumentOverview::from_document(&document);
        if overview.responded_mismatch {
            warn!(
                document_id = %document.id,
                stored = document.responded,
                "Stored responded flag disagrees with recipient response dates"
            );
        }
        Ok(overview)
    }
}
