//! Demand Status Aggregator.

use crate::domain::demand::{Demand, DemandStatus};
use crate::domain::document::Document;

/// Rolls a demand's status up from its dates and child documents.
pub struct DemandStatusAggregator;

impl DemandStatusAggregator {
    /// Resolves a demand's status. First matching rule wins:
    ///
    /// 1. opening and closing dates both set: `Finalized`
    /// 2. no opening date: the stored status, or `WaitingQueue`
    /// 3. no documents: `WaitingQueue`
    /// 4. any document with `responded == false`: `Awaiting`
    /// 5. otherwise `InProgress`
    ///
    /// Reads each document's stored `responded` flag, not its classified
    /// status.
    pub fn resolve(demand: &Demand, documents: &[Document]) -> DemandStatus {
        if demand.is_closed() {
            return DemandStatus::Finalized;
        }
        if demand.start_date.is_none() {
            return demand.status.unwrap_or_default();
        }
        if documents.is_empty() {
            return DemandStatus::WaitingQueue;
        }
        if documents.iter().any(|doc| !doc.responded) {
            return DemandStatus::Awaiting;
        }
        DemandStatus::InProgress
    }
}
