//! Demand repository port (read side).

use crate::domain::demand::Demand;
use crate::domain::foundation::{DemandId, DomainError};
use async_trait::async_trait;

/// Read access to demands.
#[async_trait]
pub trait DemandRepository: Send + Sync {
    /// Find a demand by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DemandId) -> Result<Option<Demand>, DomainError>;

    /// List every demand in insertion order.
    async fn list(&self) -> Result<Vec<Demand>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demand_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DemandRepository) {}
    }
}
