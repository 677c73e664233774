use crate::core::catalog::{MealTemplate, WorkoutTemplate};
use crate::models::{
    ActivityLevel, FoodPreference, MealSuggestion, MealTag, Range, RangeError, WorkoutIntensity,
    WorkoutSuggestion,
};

/// Maximum substitutions listed under a meal
pub const MEAL_SUBSTITUTIONS: usize = 4;
/// Maximum substitutions listed under a workout
pub const WORKOUT_SUBSTITUTIONS: usize = 2;

/// Which branch of an ordered scan produced the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// At least one item matched the predicate
    Matched,
    /// Nothing matched, so the full input list was kept
    Fallback,
}

/// Keep items matching `predicate` in input order, or all items if none match
pub fn filter_or_all<'a, T, F>(items: &[&'a T], predicate: F) -> (Vec<&'a T>, Pool)
where
    F: Fn(&T) -> bool,
{
    let matched: Vec<&'a T> = items.iter().copied().filter(|item| predicate(item)).collect();
    if matched.is_empty() {
        (items.to_vec(), Pool::Fallback)
    } else {
        (matched, Pool::Matched)
    }
}

/// Whether a meal is allowed under a dietary preference
///
/// `None` and `HighProtein` let every meal through; high-protein is a
/// ranking preference, not a filter.
#[inline]
pub fn matches_preference(meal: &MealTemplate, preference: FoodPreference) -> bool {
    match preference {
        FoodPreference::None | FoodPreference::HighProtein => true,
        FoodPreference::Vegetarian => meal.has_tag(MealTag::Vegetarian),
        FoodPreference::Halal => meal.has_tag(MealTag::Halal),
        FoodPreference::NoBeef => meal.has_tag(MealTag::NoBeef),
        FoodPreference::NoPork => meal.has_tag(MealTag::NoPork),
    }
}

/// Filter the catalog by dietary preference, never returning an empty list
/// for a non-empty catalog
pub fn filter_meals<'a>(
    catalog: &'a [MealTemplate],
    preference: FoodPreference,
) -> (Vec<&'a MealTemplate>, Pool) {
    let all: Vec<&MealTemplate> = catalog.iter().collect();
    filter_or_all(&all, |meal| matches_preference(meal, preference))
}

/// Calorie window for one meal given its share of the daily range
pub fn meal_calorie_range(day: &Range, share: f64) -> Result<Range, RangeError> {
    Range::new(
        (day.min() as f64 * share).round() as i32,
        (day.max() as f64 * share).round() as i32,
    )
}

/// Pick one meal and its substitutions from the preference-filtered list
///
/// Candidates are the meals whose calories fall in the meal's share of the
/// daily range, falling back to the whole list when none do. The primary is
/// the first high-protein candidate when `prefer_high_protein` is set (or the
/// first candidate if none is tagged), otherwise the first candidate. Up to
/// [`MEAL_SUBSTITUTIONS`] other candidates follow in catalog order.
pub fn pick_meal(
    meals: &[&MealTemplate],
    meal_range: &Range,
    prefer_high_protein: bool,
) -> Option<(MealSuggestion, Pool)> {
    let (candidates, pool) = filter_or_all(meals, |meal| meal_range.contains(meal.approx_calories));

    let primary = if prefer_high_protein {
        candidates
            .iter()
            .find(|meal| meal.has_tag(MealTag::HighProtein))
            .or_else(|| candidates.first())
    } else {
        candidates.first()
    }?;

    let substitutions = candidates
        .iter()
        .filter(|meal| meal.id != primary.id)
        .take(MEAL_SUBSTITUTIONS)
        .map(|meal| meal.to_suggestion(Vec::new()))
        .collect();

    Some((primary.to_suggestion(substitutions), pool))
}

/// Intensity tier matching an activity level
#[inline]
pub fn intensity_for(activity: ActivityLevel) -> WorkoutIntensity {
    match activity {
        ActivityLevel::Sedentary | ActivityLevel::Light => WorkoutIntensity::Low,
        ActivityLevel::Moderate => WorkoutIntensity::Moderate,
        ActivityLevel::Active | ActivityLevel::VeryActive => WorkoutIntensity::High,
    }
}

/// Pick the first workout at the activity's intensity tier
///
/// Falls back to the first catalog workout if the tier has no entry. Up to
/// [`WORKOUT_SUBSTITUTIONS`] other workouts follow in catalog order.
pub fn pick_workout(
    catalog: &[WorkoutTemplate],
    activity: ActivityLevel,
) -> Option<(WorkoutSuggestion, Pool)> {
    let tier = intensity_for(activity);

    let (primary, pool) = match catalog.iter().find(|w| w.intensity == tier) {
        Some(workout) => (workout, Pool::Matched),
        None => (catalog.first()?, Pool::Fallback),
    };

    let substitutions = catalog
        .iter()
        .filter(|w| w.id != primary.id)
        .take(WORKOUT_SUBSTITUTIONS)
        .map(|w| w.to_suggestion(Vec::new()))
        .collect();

    Some((primary.to_suggestion(substitutions), pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{MEAL_CATALOG, WORKOUT_CATALOG};

    fn ids(meals: &[&MealTemplate]) -> Vec<&'static str> {
        meals.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_filter_vegetarian() {
        let (meals, pool) = filter_meals(MEAL_CATALOG, FoodPreference::Vegetarian);
        assert_eq!(pool, Pool::Matched);
        assert_eq!(ids(&meals), vec!["oats_greek", "tofu_bowl", "lentil_soup"]);
    }

    #[test]
    fn test_filter_halal() {
        let (meals, _) = filter_meals(MEAL_CATALOG, FoodPreference::Halal);
        assert_eq!(
            ids(&meals),
            vec!["tofu_bowl", "chicken_salad", "salmon_veg", "lentil_soup"]
        );
    }

    #[test]
    fn test_filter_passthrough_preferences() {
        for preference in [FoodPreference::None, FoodPreference::HighProtein] {
            let (meals, pool) = filter_meals(MEAL_CATALOG, preference);
            assert_eq!(pool, Pool::Matched);
            assert_eq!(meals.len(), MEAL_CATALOG.len());
        }
    }

    #[test]
    fn test_filter_falls_back_when_nothing_matches() {
        static NO_TAGS: &[MealTemplate] = &[MealTemplate {
            id: "plain",
            title: "Plain",
            description: "",
            approx_calories: 500,
            tags: &[],
        }];

        let (meals, pool) = filter_meals(NO_TAGS, FoodPreference::Vegetarian);
        assert_eq!(pool, Pool::Fallback);
        assert_eq!(ids(&meals), vec!["plain"]);
    }

    #[test]
    fn test_meal_calorie_range() {
        let day = Range::new(1850, 2400).unwrap();
        let breakfast = meal_calorie_range(&day, 0.30).unwrap();
        assert_eq!((breakfast.min(), breakfast.max()), (555, 720));
    }

    #[test]
    fn test_pick_meal_first_within_range() {
        let all: Vec<&MealTemplate> = MEAL_CATALOG.iter().collect();
        let range = Range::new(555, 720).unwrap();

        let (meal, pool) = pick_meal(&all, &range, false).unwrap();
        assert_eq!(pool, Pool::Matched);
        assert_eq!(meal.id, "tofu_bowl");

        let subs: Vec<&str> = meal.substitutions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(subs, vec!["chicken_salad", "salmon_veg", "lentil_soup"]);
    }

    #[test]
    fn test_pick_meal_prefers_high_protein() {
        let all: Vec<&MealTemplate> = MEAL_CATALOG.iter().collect();
        let range = Range::new(555, 720).unwrap();

        let (meal, _) = pick_meal(&all, &range, true).unwrap();
        assert_eq!(meal.id, "chicken_salad");

        let subs: Vec<&str> = meal.substitutions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(subs, vec!["tofu_bowl", "salmon_veg", "lentil_soup"]);
    }

    #[test]
    fn test_pick_meal_high_protein_without_tagged_candidate() {
        let all: Vec<&MealTemplate> = MEAL_CATALOG.iter().collect();
        // Only pork_noodles (780) is in range and it is not high-protein
        let range = Range::new(760, 800).unwrap();

        let (meal, pool) = pick_meal(&all, &range, true).unwrap();
        assert_eq!(pool, Pool::Matched);
        assert_eq!(meal.id, "pork_noodles");
        assert!(meal.substitutions.is_empty());
    }

    #[test]
    fn test_pick_meal_falls_back_to_full_list() {
        let all: Vec<&MealTemplate> = MEAL_CATALOG.iter().collect();
        let range = Range::new(900, 1000).unwrap();

        let (meal, pool) = pick_meal(&all, &range, false).unwrap();
        assert_eq!(pool, Pool::Fallback);
        assert_eq!(meal.id, "oats_greek");
        assert_eq!(meal.substitutions.len(), MEAL_SUBSTITUTIONS);
        assert!(meal.substitutions.iter().all(|s| s.id != "oats_greek"));
    }

    #[test]
    fn test_pick_meal_empty_list() {
        let range = Range::new(500, 600).unwrap();
        assert!(pick_meal(&[], &range, false).is_none());
    }

    #[test]
    fn test_intensity_mapping() {
        assert_eq!(intensity_for(ActivityLevel::Sedentary), WorkoutIntensity::Low);
        assert_eq!(intensity_for(ActivityLevel::Light), WorkoutIntensity::Low);
        assert_eq!(intensity_for(ActivityLevel::Moderate), WorkoutIntensity::Moderate);
        assert_eq!(intensity_for(ActivityLevel::Active), WorkoutIntensity::High);
        assert_eq!(intensity_for(ActivityLevel::VeryActive), WorkoutIntensity::High);
    }

    #[test]
    fn test_pick_workout() {
        let (workout, pool) = pick_workout(WORKOUT_CATALOG, ActivityLevel::Moderate).unwrap();
        assert_eq!(pool, Pool::Matched);
        assert_eq!(workout.id, "strength_20");

        let subs: Vec<&str> = workout.substitutions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(subs, vec!["walk_30", "mobility_12"]);
    }

    #[test]
    fn test_pick_workout_low_tier_substitutions() {
        let (workout, _) = pick_workout(WORKOUT_CATALOG, ActivityLevel::Sedentary).unwrap();
        assert_eq!(workout.id, "walk_30");

        let subs: Vec<&str> = workout.substitutions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(subs, vec!["mobility_12", "strength_20"]);
    }

    #[test]
    fn test_pick_workout_missing_tier_falls_back() {
        let low_only = &WORKOUT_CATALOG[..2];
        let (workout, pool) = pick_workout(low_only, ActivityLevel::VeryActive).unwrap();
        assert_eq!(pool, Pool::Fallback);
        assert_eq!(workout.id, "walk_30");
    }

    #[test]
    fn test_pick_workout_empty_catalog() {
        assert!(pick_workout(&[], ActivityLevel::Light).is_none());
    }
}
