//! Document domain module.
//!
//! Documents are the official artifacts attached to a demand: letters,
//! circular letters, media, reports, records, and judicial decisions.
//! The type/subject vocabulary is closed (see [`DocumentKind`]).

mod aggregate;
mod errors;
mod kind;
mod payload;
mod recipient;
mod status;
mod tracking;

pub use aggregate::Document;
pub use errors::DocumentError;
pub use kind::{
    CircularLetterSubject, CircumstantialRecordSubject, DocumentKind, DocumentType,
    IntelligenceReportSubject, JudicialDecisionSubject, MediaSubject, OfficialLetterSubject,
    TechnicalReportSubject,
};
pub use payload::{JudicialRuling, MediaPayload, Rectification, ResearchEntry, SelectedReferences};
pub use recipient::{parse_addressees, Recipient};
pub use status::{DocumentStatus, RecipientStatus};
pub use tracking::Tracking;
