//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - Array-backed repositories (hosts without a database, tests)

pub mod memory;

pub use memory::{InMemoryDemandRepository, InMemoryDocumentRepository};
