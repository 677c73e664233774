// Model exports
pub mod plan;
pub mod profile;
pub mod requests;
pub mod responses;

pub use plan::{
    GoalType, MacroRanges, MealSuggestion, MealTag, Range, RangeError, TodayPlan, WorkoutIntensity,
    WorkoutSuggestion,
};
pub use profile::{ActivityLevel, FoodPreference, Sex, UserProfile};
pub use requests::UpdateProfileRequest;
pub use responses::{ErrorResponse, HealthResponse, PlanStateResponse};
