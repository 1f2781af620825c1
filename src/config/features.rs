//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeatureFlags {
    /// Reject forwarding letters that reference unfinalized circumstantial records.
    /// When off, the violation is only logged.
    #[serde(default = "default_true")]
    pub enforce_record_finalization: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enforce_record_finalization: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
