//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, date helpers, and error types that form the
//! vocabulary of the demand tracking domain.

mod dates;
mod errors;
mod ids;

pub use dates::{format_date, lenient_date, non_blank, parse_date};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DemandId, DocumentId};
