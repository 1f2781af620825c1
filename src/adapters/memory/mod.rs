//! In-memory repository adapters.

mod demand_repository;
mod document_repository;

pub use demand_repository::InMemoryDemandRepository;
pub use document_repository::InMemoryDocumentRepository;
