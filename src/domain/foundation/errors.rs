//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and snapshot validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Subject '{subject}' is not allowed for document type '{document_type}'")]
    SubjectNotAllowed {
        document_type: String,
        subject: String,
    },

    #[error("Unknown document type '{0}'")]
    UnknownDocumentType(String),

    #[error("A document cannot have both a tracking code and the no-tracking flag")]
    ConflictingTracking,

    #[error("Field 'subject_other' is only allowed when the subject is 'Other'")]
    UnexpectedSubjectOther,

    #[error("Field 'subject_other' is required when the subject is 'Other'")]
    MissingSubjectOther,
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a subject/type mismatch error.
    pub fn subject_not_allowed(
        document_type: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        ValidationError::SubjectNotAllowed {
            document_type: document_type.into(),
            subject: subject.into(),
        }
    }

    /// Returns the error code matching this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::SubjectNotAllowed { .. } | ValidationError::UnknownDocumentType(_) => {
                ErrorCode::InvalidSubject
            }
            ValidationError::ConflictingTracking
            | ValidationError::UnexpectedSubjectOther
            | ValidationError::MissingSubjectOther => ErrorCode::ValidationFailed,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,
    InvalidSubject,
    UnfinalizedRecord,

    // Not found errors
    DemandNotFound,
    DocumentNotFound,

    // Infrastructure errors
    RepositoryError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidSubject => "INVALID_SUBJECT",
            ErrorCode::UnfinalizedRecord => "UNFINALIZED_RECORD",
            ErrorCode::DemandNotFound => "DEMAND_NOT_FOUND",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::RepositoryError => "REPOSITORY_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field, .. } => {
                domain.with_detail("field", field.as_str())
            }
            ValidationError::SubjectNotAllowed {
                document_type,
                subject,
            } => domain
                .with_detail("document_type", document_type.as_str())
                .with_detail("subject", subject.as_str()),
            _ => domain,
        }
    }
}
