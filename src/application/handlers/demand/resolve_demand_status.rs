//! ResolveDemandStatusHandler - Query handler recomputing one demand's status.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::classification::DemandStatusAggregator;
use crate::domain::demand::{Demand, DemandError, DemandStatus};
use crate::domain::document::Document;
use crate::domain::foundation::DemandId;
use crate::ports::{DemandRepository, DocumentRepository};

/// Query to resolve a demand's status.
#[derive(Debug, Clone)]
pub struct ResolveDemandStatusQuery {
    pub demand_id: DemandId,
}

/// Stored and recomputed status of a demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandStatusView {
    pub demand_id: DemandId,
    /// Status as last stored, possibly stale.
    pub stored: Option<DemandStatus>,
    pub resolved: DemandStatus,
    pub document_count: usize,
    /// True when `stored` differs from `resolved`.
    pub is_stale: bool,
}

impl DemandStatusView {
    pub(crate) fn build(demand: &Demand, documents: &[Document]) -> Self {
        let resolved = DemandStatusAggregator::resolve(demand, documents);
        let view = Self {
            demand_id: demand.id,
            stored: demand.status,
            resolved,
            document_count: documents.len(),
            is_stale: demand.status != Some(resolved),
        };

        if view.is_stale {
            info!(
                demand_id = %demand.id,
                stored = ?demand.status,
                resolved = %resolved,
                "Stored demand status is stale"
            );
        }
        view
    }
}

/// Handler for recomputing a demand's status from its documents.
pub struct ResolveDemandStatusHandler {
    demands: Arc<dyn DemandRepository>,
    documents: Arc<dyn DocumentRepository>,
}

impl ResolveDemandStatusHandler {
    pub fn new(demands: Arc<dyn DemandRepository>, documents: Arc<dyn DocumentRepository>) -> Self {
        Self { demands, documents }
    }

    pub async fn handle(
        &self,
        query: ResolveDemandStatusQuery,
    ) -> Result<DemandStatusView, DemandError> {
        let demand = self
            .demands
            .find_by_id(&query.demand_id)
            .await?
            .ok_or_else(|| DemandError::not_found(query.demand_id))?;

        let documents = self.documents.find_by_demand(&demand.id).await?;
        debug!(
            demand_id = %demand.id,
            documents = documents.len(),
            "Resolving demand status"
        );

        Ok(DemandStatusView::build(&demand, &documents))
    }
}
