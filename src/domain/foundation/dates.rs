//! Calendar date and text normalization helpers.
//!
//! Records arrive from forms and legacy exports where an absent date may be
//! `null`, an empty string, or whitespace, and where dates are written either
//! as `YYYY-MM-DD` or in the local `DD/MM/YYYY` form. Everything here maps
//! those inputs to `Option<NaiveDate>` so the resolvers only ever see
//! "present" or "absent".

use chrono::NaiveDate;

use super::ValidationError;

const ISO_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parses a date in `YYYY-MM-DD` or `DD/MM/YYYY` form.
///
/// Blank input is an absent date, not an error.
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let Some(trimmed) = non_blank(raw) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DISPLAY_FORMAT))
        .map(Some)
        .map_err(|_| {
            ValidationError::invalid_format(
                "date",
                format!("'{}' is not YYYY-MM-DD or DD/MM/YYYY", trimmed),
            )
        })
}

/// Renders a date the way it is shown on documents (`DD/MM/YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Returns the trimmed text, or `None` when nothing but whitespace remains.
pub fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Serde adapter for optional dates that tolerates `""` and `DD/MM/YYYY`.
///
/// Use with `#[serde(default, with = "lenient_date")]`. Serializes as
/// ISO `YYYY-MM-DD` or `null`.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(super::ISO_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(text) => super::parse_date(&text).map_err(serde::de::Error::custom),
        }
    }
}
