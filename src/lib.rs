//! Demand Tracker - status and field-visibility engine for investigative demands.
//!
//! A demand is a case record opened at the request of an external authority.
//! Documents produced while handling it (letters, circular letters, media,
//! reports, records, judicial decisions) carry dispatch and response dates
//! from which every status in this crate is derived on read:
//!
//! - which update fields a document exposes ([`domain::classification::FieldVisibilityResolver`])
//! - per-recipient and per-document status ([`domain::classification::DocumentStatusClassifier`])
//! - a judicial decision's amendment chain ([`domain::classification::VersionChainResolver`])
//! - the demand rollup ([`domain::classification::DemandStatusAggregator`])

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
