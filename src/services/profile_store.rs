use std::future::Future;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::UserProfile;

/// Errors that can occur with profile storage
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Profile store unavailable: {0}")]
    Unavailable(String),
}

/// Source of the user's body profile
///
/// The plan core never touches storage; implementations live at the edge
/// and hand the engine plain `UserProfile` values.
pub trait ProfileStore: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<UserProfile, StoreError>> + Send;

    fn save(&self, profile: UserProfile) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Reset to the default, not-yet-onboarded profile
    fn clear(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Process-local profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    async fn load(&self) -> Result<UserProfile, StoreError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: UserProfile) -> Result<(), StoreError> {
        *self.profile.write().await = profile;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.profile.write().await = UserProfile::default();
        Ok(())
    }
}
