//! Demand query handlers.

mod list_demand_statuses;
mod resolve_demand_status;

pub use list_demand_statuses::ListDemandStatusesHandler;
pub use resolve_demand_status::{
    DemandStatusView, ResolveDemandStatusHandler, ResolveDemandStatusQuery,
};
