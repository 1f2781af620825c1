//! Demand-specific error types.

use crate::domain::foundation::{DemandId, DomainError, ErrorCode};

/// Errors raised while resolving demand views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemandError {
    /// Demand was not found.
    NotFound(DemandId),
    /// Repository failure.
    Infrastructure(String),
}

impl DemandError {
    pub fn not_found(id: DemandId) -> Self {
        DemandError::NotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DemandError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DemandError::NotFound(_) => ErrorCode::DemandNotFound,
            DemandError::Infrastructure(_) => ErrorCode::RepositoryError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DemandError::NotFound(id) => format!("Demand not found: {}", id),
            DemandError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DemandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DemandError {}

impl From<DomainError> for DemandError {
    fn from(err: DomainError) -> Self {
        DemandError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_code() {
        let id = DemandId::new();
        let err = DemandError::not_found(id);
        assert_eq!(err.code(), ErrorCode::DemandNotFound);
        assert_eq!(err.to_string(), format!("Demand not found: {}", id));
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: DemandError = DomainError::new(ErrorCode::RepositoryError, "offline").into();
        assert_eq!(err.code(), ErrorCode::RepositoryError);
        assert_eq!(err.to_string(), "Error: [REPOSITORY_ERROR] offline");
    }
}
