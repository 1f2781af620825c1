//! Individual addressees of a circular letter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Tracking;
use crate::domain::foundation::lenient_date;

/// One addressee of a circular letter with its own dispatch tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    #[serde(default, with = "lenient_date")]
    pub dispatch_date: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub response_date: Option<NaiveDate>,
    #[serde(default)]
    pub tracking: Tracking,
}

impl Recipient {
    /// Creates an undated recipient.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dispatch_date: None,
            response_date: None,
            tracking: Tracking::Unset,
        }
    }

    pub fn with_dispatch_date(mut self, date: NaiveDate) -> Self {
        self.dispatch_date = Some(date);
        self
    }

    pub fn with_response_date(mut self, date: NaiveDate) -> Self {
        self.response_date = Some(date);
        self
    }

    pub fn with_tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = tracking;
        self
    }

    /// Derived from the response date; never stored.
    pub fn responded(&self) -> bool {
        self.response_date.is_some()
    }
}

/// Splits a circular letter's addressee string into names.
///
/// Names are separated by `;`, `,`, or line breaks. Blank entries are
/// dropped and repeated names (ignoring case) keep their first occurrence.
pub fn parse_addressees(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for part in raw.split(|c| matches!(c, ';' | ',' | '\n' | '\r')) {
        let name = part.trim();
        if name.is_empty() {
            continue;
        }
        if names.iter().any(|existing| existing.eq_ignore_ascii_case(name)) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}
