//! DemandStatus enum for the rolled-up state of a case record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rolled-up status of a demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DemandStatus {
    /// Opened but nothing has been produced yet.
    #[default]
    #[serde(alias = "Waiting Queue")]
    WaitingQueue,
    /// At least one document still waits for an answer.
    #[serde(alias = "Awaiting")]
    Awaiting,
    /// Every document has been answered and the case is still open.
    #[serde(alias = "In Progress")]
    InProgress,
    /// Closing date recorded.
    #[serde(alias = "Finalized")]
    Finalized,
}

impl DemandStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DemandStatus::WaitingQueue => "Waiting Queue",
            DemandStatus::Awaiting => "Awaiting",
            DemandStatus::InProgress => "In Progress",
            DemandStatus::Finalized => "Finalized",
        }
    }

    /// Returns true once the demand is closed.
    pub fn is_finished(&self) -> bool {
        matches!(self, DemandStatus::Finalized)
    }
}

impl fmt::Display for DemandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
