use serde::{Deserialize, Serialize};

/// Self-reported daily activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to the estimated BMR
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Lowercase, space-separated name used in plan explanations
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

/// Dietary preference used to filter the meal catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPreference {
    #[default]
    None,
    Vegetarian,
    Halal,
    NoBeef,
    NoPork,
    HighProtein,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

/// Body profile the plan is generated from
///
/// Weights are optional because the profile store hands out partially
/// filled profiles during onboarding; see [`UserProfile::is_ready_for_plan`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "currentWeightKg", default)]
    pub current_weight_kg: Option<f64>,
    #[serde(rename = "targetWeightKg", default)]
    pub target_weight_kg: Option<f64>,
    #[serde(rename = "activityLevel", default)]
    pub activity_level: ActivityLevel,
    #[serde(rename = "foodPreference", default)]
    pub food_preference: FoodPreference,
    #[serde(default)]
    pub sex: Sex,
    #[serde(rename = "ageYears", default)]
    pub age_years: Option<u32>,
}

impl UserProfile {
    /// Both weights are present and positive
    pub fn is_ready_for_plan(&self) -> bool {
        matches!(self.current_weight_kg, Some(w) if w > 0.0)
            && matches!(self.target_weight_kg, Some(w) if w > 0.0)
    }

    /// Sex or age is missing, so the BMR falls back to the weight-only estimate
    pub fn is_low_information(&self) -> bool {
        self.sex == Sex::Unspecified || self.age_years.is_none()
    }
}
