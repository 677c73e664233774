use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{
    bmr,
    catalog::{MealTemplate, WorkoutTemplate, MEAL_CATALOG, WORKOUT_CATALOG},
    guardrails::{min_intake_by_sex, validate_calorie_range, validate_macros, ABSOLUTE_MAX_KCAL},
    selection::{
        filter_meals, intensity_for, meal_calorie_range, pick_meal, pick_workout, Pool,
    },
};
use crate::models::{
    ActivityLevel, FoodPreference, GoalType, MacroRanges, MealSuggestion, Range, RangeError,
    TodayPlan, UserProfile,
};

/// Energy stored in one kilogram of body fat
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Accepted window for current and target weight
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Daily calorie shares for each meal
pub const BREAKFAST_SHARE: f64 = 0.30;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.35;

pub const SAFETY_NOTE: &str =
    "This is not medical advice. If you feel unwell, stop and seek professional help.";

/// Errors returned by [`PlanEngine::generate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Profile is incomplete: current and target weight are required")]
    ProfileIncomplete,

    #[error("Weight out of bounds: current {current} kg, target {target} kg (allowed 30-300 kg)")]
    WeightOutOfBounds { current: f64, target: f64 },

    #[error("Unsafe calories: {0}")]
    UnsafeCalories(String),

    #[error("Unsafe macros: {0}")]
    UnsafeMacros(String),

    #[error("No {0} templates available")]
    EmptyCatalog(&'static str),

    #[error("Range error: {0}")]
    Range(#[from] RangeError),
}

/// Plan generator - turns a body profile into a validated daily plan
///
/// # Pipeline Stages
/// 1. Profile precondition checks
/// 2. Goal, BMR and TDEE estimation
/// 3. Calorie range by goal, clamped and validated
/// 4. Macro ranges, validated
/// 5. Meal and workout selection from the catalogs
///
/// The engine holds no mutable state; `generate` is a pure function of the
/// profile and the catalogs.
#[derive(Debug, Clone, Copy)]
pub struct PlanEngine {
    meals: &'static [MealTemplate],
    workouts: &'static [WorkoutTemplate],
}

impl PlanEngine {
    pub fn new() -> Self {
        Self::with_catalogs(MEAL_CATALOG, WORKOUT_CATALOG)
    }

    pub fn with_catalogs(
        meals: &'static [MealTemplate],
        workouts: &'static [WorkoutTemplate],
    ) -> Self {
        Self { meals, workouts }
    }

    pub fn generate(&self, profile: &UserProfile) -> Result<TodayPlan, PlanError> {
        let (current, target) = match (profile.current_weight_kg, profile.target_weight_kg) {
            (Some(current), Some(target)) if profile.is_ready_for_plan() => (current, target),
            _ => return Err(PlanError::ProfileIncomplete),
        };

        if !weight_in_bounds(current) || !weight_in_bounds(target) {
            return Err(PlanError::WeightOutOfBounds { current, target });
        }

        let goal_type = goal_for(current, target);
        let bmr = bmr::estimate(current, profile.sex, profile.age_years);
        let tdee = tdee_for(bmr, profile.activity_level);

        let calories = calorie_range_for(goal_type, tdee)?
            .clamp(min_intake_by_sex(profile.sex), ABSOLUTE_MAX_KCAL);

        debug!(
            "goal={:?} bmr={} tdee={} calories=[{}, {}]",
            goal_type,
            bmr,
            tdee,
            calories.min(),
            calories.max()
        );

        let check = validate_calorie_range(&calories, profile.sex);
        if !check.ok {
            let reason = check.reason.unwrap_or("Invalid calorie range");
            warn!("Rejected calorie range [{}, {}]: {}", calories.min(), calories.max(), reason);
            return Err(PlanError::UnsafeCalories(reason.to_string()));
        }

        let macros = macro_ranges_for(&calories)?;
        let check = validate_macros(&macros);
        if !check.ok {
            let reason = check.reason.unwrap_or("Invalid macros");
            warn!("Rejected macro ranges {:?}: {}", macros, reason);
            return Err(PlanError::UnsafeMacros(reason.to_string()));
        }

        let (meals, pool) = filter_meals(self.meals, profile.food_preference);
        if pool == Pool::Fallback {
            debug!(
                "No meals tagged for {:?}, using the full catalog",
                profile.food_preference
            );
        }

        let prefer_high_protein = profile.food_preference == FoodPreference::HighProtein;
        let breakfast = self.meal_for(&meals, &calories, BREAKFAST_SHARE, prefer_high_protein)?;
        let lunch = self.meal_for(&meals, &calories, LUNCH_SHARE, prefer_high_protein)?;
        let dinner = self.meal_for(&meals, &calories, DINNER_SHARE, prefer_high_protein)?;

        let (workout, pool) = pick_workout(self.workouts, profile.activity_level)
            .ok_or(PlanError::EmptyCatalog("workout"))?;
        if pool == Pool::Fallback {
            debug!(
                "No workout at the {:?} tier, using {}",
                intensity_for(profile.activity_level),
                workout.id
            );
        }

        debug!(
            "Selected breakfast={} lunch={} dinner={} workout={}",
            breakfast.id, lunch.id, dinner.id, workout.id
        );

        Ok(TodayPlan {
            goal_type,
            bmr,
            tdee,
            calories,
            macros,
            explanation: build_explanation(goal_type, profile),
            breakfast,
            lunch,
            dinner,
            workout,
            safety_note: SAFETY_NOTE.to_string(),
        })
    }

    fn meal_for(
        &self,
        meals: &[&MealTemplate],
        day: &Range,
        share: f64,
        prefer_high_protein: bool,
    ) -> Result<MealSuggestion, PlanError> {
        let meal_range = meal_calorie_range(day, share)?;
        let (meal, pool) = pick_meal(meals, &meal_range, prefer_high_protein)
            .ok_or(PlanError::EmptyCatalog("meal"))?;

        if pool == Pool::Fallback {
            debug!(
                "No meal within [{}, {}] kcal, picked {} from the full list",
                meal_range.min(),
                meal_range.max(),
                meal.id
            );
        }

        Ok(meal)
    }
}

impl Default for PlanEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a plan with the built-in catalogs
pub fn generate(profile: &UserProfile) -> Result<TodayPlan, PlanError> {
    PlanEngine::new().generate(profile)
}

#[inline]
fn weight_in_bounds(weight_kg: f64) -> bool {
    (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg)
}

/// Lose when the target is below the current weight, gain when above,
/// maintain on exact equality
pub fn goal_for(current_kg: f64, target_kg: f64) -> GoalType {
    if target_kg < current_kg {
        GoalType::Lose
    } else if target_kg > current_kg {
        GoalType::Gain
    } else {
        GoalType::Maintain
    }
}

#[inline]
pub fn tdee_for(bmr: i32, activity: ActivityLevel) -> i32 {
    (bmr as f64 * activity.factor()).round() as i32
}

/// Unclamped calorie range for a goal
///
/// Losing targets 0.5-1.0 kg/week. The larger deficit gives the lower bound,
/// so the range is `[tdee - max_deficit, tdee - min_deficit]`.
pub fn calorie_range_for(goal: GoalType, tdee: i32) -> Result<Range, RangeError> {
    match goal {
        GoalType::Lose => {
            let min_deficit = (KCAL_PER_KG_FAT * 0.5 / 7.0).round() as i32;
            let max_deficit = (KCAL_PER_KG_FAT * 1.0 / 7.0).round() as i32;
            Range::new(tdee - max_deficit, tdee - min_deficit)
        }
        GoalType::Gain => Range::new(tdee + 250, tdee + 500),
        GoalType::Maintain => Range::new(tdee - 100, tdee + 100),
    }
}

/// AMDR gram ranges derived from a calorie range
///
/// Carbohydrate 45-65% and protein 10-35% at 4 kcal/g, fat 20-35% at
/// 9 kcal/g. Gram minimums use the calorie minimum, maximums the calorie
/// maximum.
pub fn macro_ranges_for(calories: &Range) -> Result<MacroRanges, RangeError> {
    let grams = |pct_min: f64, pct_max: f64, kcal_per_gram: f64| {
        let g_min = (calories.min() as f64 * pct_min / kcal_per_gram).round() as i32;
        let g_max = (calories.max() as f64 * pct_max / kcal_per_gram).round() as i32;
        Range::new(g_min.max(0), g_max.max(0))
    };

    Ok(MacroRanges {
        carbs_g: grams(0.45, 0.65, 4.0)?,
        protein_g: grams(0.10, 0.35, 4.0)?,
        fat_g: grams(0.20, 0.35, 9.0)?,
    })
}

fn build_explanation(goal: GoalType, profile: &UserProfile) -> String {
    let goal_text = match goal {
        GoalType::Lose => "a gentle deficit",
        GoalType::Gain => "a gentle surplus",
        GoalType::Maintain => "maintenance",
    };

    let precision = if profile.is_low_information() {
        " (estimation is less precise; add sex and age for better accuracy)"
    } else {
        ""
    };

    format!(
        "Based on your activity level ({}) and today's goal ({}), \
         we propose a safe calorie range.{}",
        profile.activity_level.label(),
        goal_text,
        precision
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sex, WorkoutIntensity};

    fn profile(
        current: f64,
        target: f64,
        activity: ActivityLevel,
        sex: Sex,
        age: Option<u32>,
    ) -> UserProfile {
        UserProfile {
            current_weight_kg: Some(current),
            target_weight_kg: Some(target),
            activity_level: activity,
            food_preference: FoodPreference::None,
            sex,
            age_years: age,
        }
    }

    #[test]
    fn test_goal_for() {
        assert_eq!(goal_for(80.0, 72.0), GoalType::Lose);
        assert_eq!(goal_for(55.0, 60.0), GoalType::Gain);
        assert_eq!(goal_for(65.0, 65.0), GoalType::Maintain);
    }

    #[test]
    fn test_lose_range_puts_larger_deficit_at_lower_bound() {
        let range = calorie_range_for(GoalType::Lose, 2950).unwrap();
        assert_eq!(range.min(), 2950 - 1100);
        assert_eq!(range.max(), 2950 - 550);
    }

    #[test]
    fn test_gain_and_maintain_ranges() {
        let gain = calorie_range_for(GoalType::Gain, 2000).unwrap();
        assert_eq!((gain.min(), gain.max()), (2250, 2500));

        let maintain = calorie_range_for(GoalType::Maintain, 2000).unwrap();
        assert_eq!((maintain.min(), maintain.max()), (1900, 2100));
    }

    #[test]
    fn test_macro_ranges() {
        let macros = macro_ranges_for(&Range::new(1850, 2400).unwrap()).unwrap();
        // 1850 * 0.45 / 4 = 208.125, 2400 * 0.65 / 4 = 390
        assert_eq!((macros.carbs_g.min(), macros.carbs_g.max()), (208, 390));
        // 1850 * 0.10 / 4 = 46.25, 2400 * 0.35 / 4 = 210
        assert_eq!((macros.protein_g.min(), macros.protein_g.max()), (46, 210));
        // 1850 * 0.20 / 9 = 41.1, 2400 * 0.35 / 9 = 93.3
        assert_eq!((macros.fat_g.min(), macros.fat_g.max()), (41, 93));
    }

    #[test]
    fn test_incomplete_profile() {
        let mut p = profile(80.0, 72.0, ActivityLevel::Moderate, Sex::Male, Some(25));
        p.target_weight_kg = None;
        assert_eq!(generate(&p), Err(PlanError::ProfileIncomplete));
    }

    #[test]
    fn test_weight_out_of_bounds() {
        let p = profile(80.0, 301.0, ActivityLevel::Moderate, Sex::Male, Some(25));
        assert!(matches!(generate(&p), Err(PlanError::WeightOutOfBounds { .. })));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let p = profile(30.0, 30.0, ActivityLevel::Sedentary, Sex::Female, Some(40));
        assert!(generate(&p).is_ok());
    }

    #[test]
    fn test_low_information_explanation() {
        let p = profile(70.0, 65.0, ActivityLevel::VeryActive, Sex::Unspecified, None);
        let plan = generate(&p).unwrap();
        assert!(plan.explanation.contains("very active"));
        assert!(plan.explanation.contains("a gentle deficit"));
        assert!(plan.explanation.contains("less precise"));

        let p = profile(70.0, 70.0, ActivityLevel::Light, Sex::Female, Some(35));
        let plan = generate(&p).unwrap();
        assert!(plan.explanation.contains("maintenance"));
        assert!(!plan.explanation.contains("less precise"));
    }

    #[test]
    fn test_clamped_lose_range_collapses_to_floor() {
        // 10.5 * 50 + 596 = 1121, tdee 1345, raw range [245, 795]
        let p = profile(50.0, 45.0, ActivityLevel::Sedentary, Sex::Female, Some(65));
        let plan = generate(&p).unwrap();
        assert_eq!((plan.calories.min(), plan.calories.max()), (1200, 1200));
    }

    #[test]
    fn test_empty_workout_catalog() {
        static NO_WORKOUTS: &[WorkoutTemplate] = &[];
        let engine = PlanEngine::with_catalogs(MEAL_CATALOG, NO_WORKOUTS);
        let p = profile(80.0, 72.0, ActivityLevel::Moderate, Sex::Male, Some(25));
        assert_eq!(engine.generate(&p), Err(PlanError::EmptyCatalog("workout")));
    }

    #[test]
    fn test_empty_meal_catalog() {
        static NO_MEALS: &[MealTemplate] = &[];
        let engine = PlanEngine::with_catalogs(NO_MEALS, WORKOUT_CATALOG);
        let p = profile(80.0, 72.0, ActivityLevel::Moderate, Sex::Male, Some(25));
        assert_eq!(engine.generate(&p), Err(PlanError::EmptyCatalog("meal")));
    }

    #[test]
    fn test_custom_workout_catalog() {
        static ONE_WORKOUT: &[WorkoutTemplate] = &[WorkoutTemplate {
            id: "swim_25",
            title: "Swim 25 minutes",
            details: "Steady laps.",
            intensity: WorkoutIntensity::Moderate,
        }];
        let engine = PlanEngine::with_catalogs(MEAL_CATALOG, ONE_WORKOUT);
        let p = profile(80.0, 72.0, ActivityLevel::Moderate, Sex::Male, Some(25));

        let plan = engine.generate(&p).unwrap();
        assert_eq!(plan.workout.id, "swim_25");
        assert!(plan.workout.substitutions.is_empty());

        // No high-intensity entry, so the first workout stands in
        let p = profile(80.0, 72.0, ActivityLevel::VeryActive, Sex::Male, Some(25));
        let plan = engine.generate(&p).unwrap();
        assert_eq!(plan.workout.id, "swim_25");
    }
}
