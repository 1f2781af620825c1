//! Document query and command handlers.

mod get_document_overview;
mod validate_forwarding;

pub use get_document_overview::{
    DocumentOverview, GetDocumentOverviewHandler, GetDocumentOverviewQuery,
};
pub use validate_forwarding::{ValidateForwardingCommand, ValidateForwardingHandler};
