//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, date helpers, errors)
//! - `document` - Documents, their closed type/subject vocabulary, recipients
//! - `demand` - Demand case records and their status
//! - `classification` - Pure resolvers for visibility and status

pub mod classification;
pub mod demand;
pub mod document;
pub mod foundation;
