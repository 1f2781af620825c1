//! In-Memory Demand Repository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::demand::Demand;
use crate::domain::foundation::{DemandId, DomainError};
use crate::ports::DemandRepository;

/// In-memory storage for demands, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDemandRepository {
    demands: Arc<RwLock<Vec<Demand>>>,
}

impl InMemoryDemandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demands(demands: Vec<Demand>) -> Self {
        Self {
            demands: Arc::new(RwLock::new(demands)),
        }
    }

    /// Insert a demand, replacing any stored demand with the same ID
    pub async fn insert(&self, demand: Demand) {
        let mut demands = self.demands.write().await;
        match demands.iter_mut().find(|d| d.id == demand.id) {
            Some(existing) => *existing = demand,
            None => demands.push(demand),
        }
    }

    pub async fn remove(&self, id: &DemandId) -> Option<Demand> {
        let mut demands = self.demands.write().await;
        let position = demands.iter().position(|d| d.id == *id)?;
        Some(demands.remove(position))
    }

    pub async fn clear(&self) {
        self.demands.write().await.clear();
    }
}

#[async_trait]
impl DemandRepository for InMemoryDemandRepository {
    async fn find_by_id(&self, id: &DemandId) -> Result<Option<Demand>, DomainError> {
        let demands = self.demands.read().await;
        Ok(demands.iter().find(|d| d.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Demand>, DomainError> {
        Ok(self.demands.read().await.clone())
    }
}
