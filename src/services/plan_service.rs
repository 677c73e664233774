use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::core::PlanEngine;
use crate::models::{PlanStateResponse, TodayPlan, UserProfile};
use crate::services::profile_store::{ProfileStore, StoreError};

/// Latest published plan outcome
#[derive(Debug, Clone, PartialEq)]
pub enum PlanState {
    /// Profile is missing a weight; nothing to show yet
    Incomplete,
    Ready(TodayPlan),
    /// The engine rejected the profile or its numbers
    Failed { reason: String },
}

impl From<PlanState> for PlanStateResponse {
    fn from(state: PlanState) -> Self {
        match state {
            PlanState::Incomplete => PlanStateResponse {
                status: "incomplete".to_string(),
                plan: None,
                reason: None,
            },
            PlanState::Ready(plan) => PlanStateResponse {
                status: "ready".to_string(),
                plan: Some(plan),
                reason: None,
            },
            PlanState::Failed { reason } => PlanStateResponse {
                status: "failed".to_string(),
                plan: None,
                reason: Some(reason),
            },
        }
    }
}

/// Recomputes the plan whenever the profile changes and publishes the result
///
/// Writers are serialized by the state lock, so the published plan always
/// belongs to the most recently saved profile. Readers get a clone.
pub struct PlanService<S> {
    store: S,
    engine: PlanEngine,
    state: RwLock<PlanState>,
}

impl<S: ProfileStore> PlanService<S> {
    pub fn new(store: S, engine: PlanEngine) -> Self {
        Self {
            store,
            engine,
            state: RwLock::new(PlanState::Incomplete),
        }
    }

    /// Latest published state
    pub async fn current(&self) -> PlanState {
        self.state.read().await.clone()
    }

    pub async fn profile(&self) -> Result<UserProfile, StoreError> {
        self.store.load().await
    }

    /// Save a new profile and publish the plan computed from it
    pub async fn update_profile(&self, profile: UserProfile) -> Result<PlanState, StoreError> {
        let mut state = self.state.write().await;
        self.store.save(profile.clone()).await?;
        *state = self.compute(&profile);
        Ok(state.clone())
    }

    /// Recompute from whatever the store currently holds
    pub async fn refresh(&self) -> Result<PlanState, StoreError> {
        let mut state = self.state.write().await;
        let profile = self.store.load().await?;
        *state = self.compute(&profile);
        Ok(state.clone())
    }

    /// Clear the stored profile and withdraw the published plan
    pub async fn reset(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        self.store.clear().await?;
        *state = PlanState::Incomplete;
        info!("Profile cleared, plan withdrawn");
        Ok(())
    }

    fn compute(&self, profile: &UserProfile) -> PlanState {
        if !profile.is_ready_for_plan() {
            info!("Profile not ready for a plan yet");
            return PlanState::Incomplete;
        }

        match self.engine.generate(profile) {
            Ok(plan) => {
                info!(
                    "Published plan: goal={:?}, calories=[{}, {}]",
                    plan.goal_type,
                    plan.calories.min(),
                    plan.calories.max()
                );
                PlanState::Ready(plan)
            }
            Err(e) => {
                warn!("Plan generation failed: {}", e);
                PlanState::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
