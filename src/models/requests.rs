use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{ActivityLevel, FoodPreference, Sex, UserProfile};

/// Request to replace the stored profile
///
/// Bounds here only reject nonsense input; the plan engine applies its own
/// stricter weight window and reports a plan failure instead.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(range(exclusive_min = 0.0, max = 1000.0))]
    #[serde(alias = "current_weight_kg", rename = "currentWeightKg", default)]
    pub current_weight_kg: Option<f64>,
    #[validate(range(exclusive_min = 0.0, max = 1000.0))]
    #[serde(alias = "target_weight_kg", rename = "targetWeightKg", default)]
    pub target_weight_kg: Option<f64>,
    #[serde(alias = "activity_level", rename = "activityLevel", default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(alias = "food_preference", rename = "foodPreference", default)]
    pub food_preference: Option<FoodPreference>,
    #[serde(default)]
    pub sex: Sex,
    #[validate(range(min = 1, max = 120))]
    #[serde(alias = "age_years", rename = "ageYears", default)]
    pub age_years: Option<u32>,
}

impl UpdateProfileRequest {
    /// Build a profile, filling omitted enums from the configured defaults
    pub fn into_profile(
        self,
        default_activity: ActivityLevel,
        default_preference: FoodPreference,
    ) -> UserProfile {
        UserProfile {
            current_weight_kg: self.current_weight_kg,
            target_weight_kg: self.target_weight_kg,
            activity_level: self.activity_level.unwrap_or(default_activity),
            food_preference: self.food_preference.unwrap_or(default_preference),
            sex: self.sex,
            age_years: self.age_years,
        }
    }
}
