//! FitPath Plan - daily nutrition and activity plan generator
//!
//! This library turns a user's body profile into a bounded, validated
//! calorie, macro, meal and workout recommendation. The algorithm lives in
//! [`core`] and is a pure function of the profile and the static catalogs;
//! [`services`] and [`routes`] wrap it for the surrounding app.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{generate, PlanEngine, PlanError};
pub use crate::models::{
    ActivityLevel, FoodPreference, GoalType, Range, Sex, TodayPlan, UserProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let profile = UserProfile {
            current_weight_kg: Some(70.0),
            target_weight_kg: Some(70.0),
            ..Default::default()
        };
        let plan = generate(&profile).unwrap();
        assert_eq!(plan.goal_type, GoalType::Maintain);
    }
}
