//! Classification Module - Pure status and field-visibility rules.
//!
//! Stateless functions over document and demand snapshots. Nothing here
//! mutates its input or performs I/O, so results can be recomputed on every
//! change without caching.
//!
//! # Components
//!
//! - `FieldVisibilityResolver` - (type, subject) to visible fields
//! - `RecipientStatusResolver` - one circular letter addressee
//! - `DocumentStatusClassifier` - whole document, aggregating addressees
//! - `VersionChainResolver` - judicial decision and its amendments
//! - `DemandStatusAggregator` - demand rollup from child documents
//! - `ForwardingValidator` - finalized-record precondition for forwarding

mod demand_status;
mod document_status;
mod field_visibility;
mod forwarding;
mod recipient_status;
mod version_chain;

pub use demand_status::DemandStatusAggregator;
pub use document_status::{DocumentStatusClassifier, RecipientStatusEntry};
pub use field_visibility::{FieldVisibilityResolver, FieldVisibilitySet};
pub use forwarding::{ForwardingError, ForwardingValidator};
pub use recipient_status::RecipientStatusResolver;
pub use version_chain::{
    VersionChain, VersionChainResolver, VersionEntry, ORIGINAL_DECISION_LABEL,
};
