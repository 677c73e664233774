use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::PlanEngine;
use crate::models::{
    ActivityLevel, ErrorResponse, FoodPreference, HealthResponse, PlanStateResponse,
    UpdateProfileRequest, UserProfile,
};
use crate::services::{InMemoryProfileStore, PlanService, ProfileStore, StoreError};

/// Application state shared across all handlers
pub struct AppState<S = InMemoryProfileStore> {
    pub plans: Arc<PlanService<S>>,
    pub engine: PlanEngine,
    pub default_activity_level: ActivityLevel,
    pub default_food_preference: FoodPreference,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            plans: Arc::clone(&self.plans),
            engine: self.engine,
            default_activity_level: self.default_activity_level,
            default_food_preference: self.default_food_preference,
        }
    }
}

/// Configure all plan-related routes
pub fn configure<S: ProfileStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profile", web::get().to(get_profile::<S>))
        .route("/profile", web::put().to(update_profile::<S>))
        .route("/profile", web::delete().to(delete_profile::<S>))
        .route("/plan/today", web::get().to(get_today_plan::<S>))
        .route("/plan/preview", web::post().to(preview_plan::<S>));
}

fn store_error(context: &str, e: StoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/profile
async fn get_profile<S: ProfileStore>(state: web::Data<AppState<S>>) -> impl Responder {
    match state.plans.profile().await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => store_error("Failed to load profile", e),
    }
}

/// Replace the stored profile and recompute today's plan
///
/// PUT /api/v1/profile
///
/// Request body:
/// ```json
/// {
///   "currentWeightKg": 80.0,
///   "targetWeightKg": 72.0,
///   "activityLevel": "moderate",
///   "foodPreference": "none",
///   "sex": "male",
///   "ageYears": 25
/// }
/// ```
async fn update_profile<S: ProfileStore>(
    state: web::Data<AppState<S>>,
    req: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for profile update: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req
        .into_inner()
        .into_profile(state.default_activity_level, state.default_food_preference);

    match state.plans.update_profile(profile).await {
        Ok(plan_state) => HttpResponse::Ok().json(PlanStateResponse::from(plan_state)),
        Err(e) => store_error("Failed to save profile", e),
    }
}

/// DELETE /api/v1/profile
async fn delete_profile<S: ProfileStore>(state: web::Data<AppState<S>>) -> impl Responder {
    match state.plans.reset().await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error("Failed to clear profile", e),
    }
}

/// GET /api/v1/plan/today
async fn get_today_plan<S: ProfileStore>(state: web::Data<AppState<S>>) -> impl Responder {
    let plan_state = state.plans.current().await;
    HttpResponse::Ok().json(PlanStateResponse::from(plan_state))
}

/// Generate a plan for the posted profile without storing anything
///
/// POST /api/v1/plan/preview
async fn preview_plan<S>(
    state: web::Data<AppState<S>>,
    profile: web::Json<UserProfile>,
) -> impl Responder {
    match state.engine.generate(&profile) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(e) => {
            tracing::info!("Preview rejected: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Plan unavailable".to_string(),
                message: format!("{}. Please review your profile.", e),
                status_code: 400,
            })
        }
    }
}
