//! Demand domain module.
//!
//! A demand is the case record that owns documents. Its status is never
//! authoritative on its own; see the demand status aggregator.

mod aggregate;
mod errors;
mod status;

pub use aggregate::Demand;
pub use errors::DemandError;
pub use status::DemandStatus;
