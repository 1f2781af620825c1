//! Postal tracking state for a dispatched letter.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{non_blank, ValidationError};

/// Tracking state of a dispatch.
///
/// A tracking code and the explicit "no tracking" flag are mutually exclusive,
/// so both live in one enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(
    tag = "kind",
    content = "code",
    rename_all = "snake_case",
    from = "TrackingRecord"
)]
pub enum Tracking {
    #[default]
    Unset,
    Code(String),
    NoTracking,
}

/// Wire form of [`Tracking`]; blank codes are normalized on conversion.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
enum TrackingRecord {
    Unset,
    Code(String),
    NoTracking,
}

impl From<TrackingRecord> for Tracking {
    fn from(record: TrackingRecord) -> Self {
        match record {
            TrackingRecord::Unset => Tracking::Unset,
            TrackingRecord::Code(code) => Tracking::code(code),
            TrackingRecord::NoTracking => Tracking::NoTracking,
        }
    }
}

impl Tracking {
    /// Creates a tracking code; a blank code is `Unset`.
    pub fn code(raw: impl AsRef<str>) -> Self {
        match non_blank(raw.as_ref()) {
            Some(code) => Tracking::Code(code.to_string()),
            None => Tracking::Unset,
        }
    }

    /// Builds tracking from the flat (code, flag) pair used by forms.
    ///
    /// # Errors
    ///
    /// - `ConflictingTracking` if a non-blank code is given with the flag set
    pub fn from_parts(code: Option<&str>, no_tracking: bool) -> Result<Self, ValidationError> {
        let code = code.and_then(non_blank);
        match (code, no_tracking) {
            (Some(_), true) => Err(ValidationError::ConflictingTracking),
            (Some(code), false) => Ok(Tracking::Code(code.to_string())),
            (None, true) => Ok(Tracking::NoTracking),
            (None, false) => Ok(Tracking::Unset),
        }
    }

    /// Returns the tracking code, if any.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            Tracking::Code(code) => Some(code),
            _ => None,
        }
    }

    /// Returns true when the dispatch was explicitly sent without tracking.
    pub fn is_untracked(&self) -> bool {
        matches!(self, Tracking::NoTracking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_code_is_unset() {
        assert_eq!(Tracking::code("   "), Tracking::Unset);
    }

    #[test]
    fn code_is_trimmed() {
        assert_eq!(Tracking::code(" BR123 ").as_code(), Some("BR123"));
    }

    #[test]
    fn code_and_flag_conflict() {
        assert_eq!(
            Tracking::from_parts(Some("BR123"), true),
            Err(ValidationError::ConflictingTracking)
        );
    }

    #[test]
    fn blank_code_with_flag_is_untracked() {
        let tracking = Tracking::from_parts(Some(""), true).unwrap();
        assert!(tracking.is_untracked());
    }

    #[test]
    fn deserialized_blank_code_is_unset() {
        let tracking: Tracking = serde_json::from_str(r#"{"kind":"code","code":"  "}"#).unwrap();
        assert_eq!(tracking, Tracking::Unset);
    }

    #[test]
    fn deserialized_code_is_trimmed_and_round_trips() {
        let tracking: Tracking =
            serde_json::from_str(r#"{"kind":"code","code":" BR123 "}"#).unwrap();
        assert_eq!(tracking, Tracking::Code("BR123".to_string()));

        let json = serde_json::to_string(&tracking).unwrap();
        assert_eq!(json, r#"{"kind":"code","code":"BR123"}"#);
        assert_eq!(serde_json::from_str::<Tracking>(&json).unwrap(), tracking);
    }

    #[test]
    fn deserializes_no_tracking() {
        let tracking: Tracking = serde_json::from_str(r#"{"kind":"no_tracking"}"#).unwrap();
        assert!(tracking.is_untracked());
    }

    #[test]
    fn neither_is_unset() {
        assert_eq!(Tracking::from_parts(None, false).unwrap(), Tracking::Unset);
    }
}
