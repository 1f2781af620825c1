//! Document-specific error types.

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};

/// Errors raised while resolving document views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Document was not found.
    NotFound(DocumentId),
    /// Repository failure.
    Infrastructure(String),
}

impl DocumentError {
    pub fn not_found(id: DocumentId) -> Self {
        DocumentError::NotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DocumentError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DocumentError::NotFound(_) => ErrorCode::DocumentNotFound,
            DocumentError::Infrastructure(_) => ErrorCode::RepositoryError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DocumentError::NotFound(id) => format!("Document not found: {}", id),
            DocumentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DocumentError {}

impl From<DomainError> for DocumentError {
    fn from(err: DomainError) -> Self {
        DocumentError::Infrastructure(err.to_string())
    }
}
