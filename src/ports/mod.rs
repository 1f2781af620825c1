//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentRepository` - Read access to documents
//! - `DemandRepository` - Read access to demands

mod demand_repository;
mod document_repository;

pub use demand_repository::DemandRepository;
pub use document_repository::DocumentRepository;
