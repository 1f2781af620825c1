//! Application handlers.
//!
//! Query and command handlers that load snapshots through the ports and
//! run the classification rules over them.

pub mod demand;
pub mod document;

pub use demand::{
    DemandStatusView, ListDemandStatusesHandler, ResolveDemandStatusHandler,
    ResolveDemandStatusQuery,
};
pub use document::{
    DocumentOverview, GetDocumentOverviewHandler, GetDocumentOverviewQuery,
    ValidateForwardingCommand, ValidateForwardingHandler,
};
