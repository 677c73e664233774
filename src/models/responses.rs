use serde::{Deserialize, Serialize};
use crate::models::plan::TodayPlan;

/// Response describing the latest published plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStateResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TodayPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
