// Core algorithm exports
pub mod bmr;
pub mod catalog;
pub mod engine;
pub mod guardrails;
pub mod selection;

pub use catalog::{MealTemplate, WorkoutTemplate, MEAL_CATALOG, WORKOUT_CATALOG};
pub use engine::{generate, PlanEngine, PlanError};
pub use guardrails::{min_intake_by_sex, validate_calorie_range, validate_macros, ValidationResult};
pub use selection::{filter_meals, pick_meal, pick_workout, Pool};
