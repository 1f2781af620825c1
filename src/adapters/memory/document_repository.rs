//! In-Memory Document Repository
//!
//! Array-backed store for hosts without a database and for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::Document;
use crate::domain::foundation::{DemandId, DocumentId, DomainError};
use crate::ports::DocumentRepository;

/// In-memory storage for documents, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentRepository {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryDocumentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with documents
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }

    /// Insert a document, replacing any stored document with the same ID
    pub async fn insert(&self, document: Document) {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => documents.push(document),
        }
    }

    /// Remove a document, returning it if present
    pub async fn remove(&self, id: &DocumentId) -> Option<Document> {
        let mut documents = self.documents.write().await;
        let position = documents.iter().position(|d| d.id == *id)?;
        Some(documents.remove(position))
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    /// Get the number of stored documents
    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id == *id).cloned())
    }

    async fn find_by_demand(&self, demand_id: &DemandId) -> Result<Vec<Document>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| d.demand_id == *demand_id)
            .cloned()
            .collect())
    }

    async fn find_many(&self, ids: &[DocumentId]) -> Result<Vec<Document>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| ids.contains(&d.id))
            .cloned()
            .collect())
    }
}
