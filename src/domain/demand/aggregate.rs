//! Demand record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DemandStatus;
use crate::domain::foundation::{lenient_date, DemandId};

/// A tracked legal/administrative case.
///
/// `status` is whatever was last stored and may be stale; the demand status
/// aggregator recomputes it from the dates and child documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    pub id: DemandId,
    #[serde(default)]
    pub reference_numbers: Vec<String>,
    #[serde(default)]
    pub requesting_authority: String,
    #[serde(default, alias = "dataInicial", with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, alias = "dataFinal", with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<DemandStatus>,
}

impl Demand {
    /// Creates an unopened demand.
    pub fn new(requesting_authority: impl Into<String>) -> Self {
        Self {
            id: DemandId::new(),
            reference_numbers: Vec::new(),
            requesting_authority: requesting_authority.into(),
            start_date: None,
            end_date: None,
            status: None,
        }
    }

    pub fn with_reference_number(mut self, reference: impl Into<String>) -> Self {
        self.reference_numbers.push(reference.into());
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: DemandStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Both opening and closing dates are recorded.
    pub fn is_closed(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }
}
