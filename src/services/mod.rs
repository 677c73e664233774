// Service exports
pub mod plan_service;
pub mod profile_store;

pub use plan_service::{PlanService, PlanState};
pub use profile_store::{InMemoryProfileStore, ProfileStore, StoreError};
