//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates the pure classification rules over repository snapshots.
//! Every status here is recomputed on read; nothing is written back.

pub mod handlers;

pub use handlers::{
    // Demand handlers
    DemandStatusView, ListDemandStatusesHandler, ResolveDemandStatusHandler,
    ResolveDemandStatusQuery,
    // Document handlers
    DocumentOverview, GetDocumentOverviewHandler, GetDocumentOverviewQuery,
    ValidateForwardingCommand, ValidateForwardingHandler,
};
