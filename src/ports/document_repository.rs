//! Document repository port (read side).
//!
//! The classification engine only reads documents, so the port exposes
//! lookups and nothing else. Hosts own writes through their own storage.

use crate::domain::document::Document;
use crate::domain::foundation::{DemandId, DocumentId, DomainError};
use async_trait::async_trait;

/// Read access to documents.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Find a document by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, DomainError>;

    /// Find every document belonging to a demand.
    ///
    /// Returns documents in insertion order; an unknown demand yields an empty list.
    async fn find_by_demand(&self, demand_id: &DemandId) -> Result<Vec<Document>, DomainError>;

    /// Find the documents for a set of IDs.
    ///
    /// IDs that do not resolve are skipped, so the result may be shorter
    /// than the input.
    async fn find_many(&self, ids: &[DocumentId]) -> Result<Vec<Document>, DomainError>;
}
