//! Lifecycle statuses derived for documents and their recipients.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single circular letter addressee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientStatus {
    NotSent,
    Pending,
    Answered,
}

impl RecipientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecipientStatus::NotSent => "Not Sent",
            RecipientStatus::Pending => "Pending",
            RecipientStatus::Answered => "Answered",
        }
    }
}

impl fmt::Display for RecipientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Overall status of a document.
///
/// `NoStatus` means the document type does not carry a status at all and no
/// indicator should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    NotSent,
    Pending,
    Answered,
    NoStatus,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::NotSent => "Not Sent",
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Answered => "Answered",
            DocumentStatus::NoStatus => "No Status",
        }
    }

    /// Returns true if a status indicator should be rendered.
    pub fn is_displayable(&self) -> bool {
        !matches!(self, DocumentStatus::NoStatus)
    }
}

impl From<RecipientStatus> for DocumentStatus {
    fn from(status: RecipientStatus) -> Self {
        match status {
            RecipientStatus::NotSent => DocumentStatus::NotSent,
            RecipientStatus::Pending => DocumentStatus::Pending,
            RecipientStatus::Answered => DocumentStatus::Answered,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
