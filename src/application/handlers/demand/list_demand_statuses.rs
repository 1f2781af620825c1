//! ListDemandStatusesHandler - Query handler recomputing every demand's status.

use std::sync::Arc;

use tracing::debug;

use super::DemandStatusView;
use crate::domain::demand::DemandError;
use crate::ports::{DemandRepository, DocumentRepository};

/// Handler for recomputing the status of every demand.
pub struct ListDemandStatusesHandler {
    demands: Arc<dyn DemandRepository>,
    documents: Arc<dyn DocumentRepository>,
}

impl ListDemandStatusesHandler {
    pub fn new(demands: Arc<dyn DemandRepository>, documents: Arc<dyn DocumentRepository>) -> Self {
        Self { demands, documents }
    }

    /// Returns one view per demand, in repository order.
    pub async fn handle(&self) -> Result<Vec<DemandStatusView>, DemandError> {
        let demands = self.demands.list().await?;
        debug!(demands = demands.len(), "Resolving all demand statuses");

        let mut views = Vec::with_capacity(demands.len());
        for demand in &demands {
            let documents = self.documents.find_by_demand(&demand.id).await?;
            views.push(DemandStatusView::build(demand, &documents));
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryDemandRepository, InMemoryDocumentRepository};
    use crate::domain::demand::{Demand, DemandStatus};
    use crate::domain::document::{Document, DocumentKind, OfficialLetterSubject};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn resolves_each_demand() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let waiting = Demand::new("Civil Police").with_start_date(start);
        let closed = Demand::new("Federal Police")
            .with_start_date(start)
            .with_end_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        let in_progress = Demand::new("Prosecutor's Office").with_start_date(start);
        let answered = Document::new(
            in_progress.id,
            DocumentKind::OfficialLetter(OfficialLetterSubject::CallRecordsRequest),
            "OF-7",
        )
        .with_responded(true);

        let handler = ListDemandStatusesHandler::new(
            Arc::new(InMemoryDemandRepository::with_demands(vec![
                waiting,
                closed,
                in_progress,
            ])),
            Arc::new(InMemoryDocumentRepository::with_documents(vec![answered])),
        );

        let resolved: Vec<_> = handler
            .handle()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.resolved)
            .collect();
        assert_eq!(
            resolved,
            vec![
                DemandStatus::WaitingQueue,
                DemandStatus::Finalized,
                DemandStatus::InProgress
            ]
        );
    }

    #[tokio::test]
    async fn empty_repository_yields_no_views() {
        let handler = ListDemandStatusesHandler::new(
            Arc::new(InMemoryDemandRepository::new()),
            Arc::new(InMemoryDocumentRepository::new()),
        );
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
