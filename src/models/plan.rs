use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Inverted range: min {min} is greater than max {max}")]
    Inverted { min: i32, max: i32 },
}

/// Inclusive integer interval with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    min: i32,
    max: i32,
}

#[derive(Deserialize)]
struct RawRange {
    min: i32,
    max: i32,
}

impl TryFrom<RawRange> for Range {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Range::new(raw.min, raw.max)
    }
}

impl Range {
    pub fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn width(&self) -> i32 {
        self.max - self.min
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp both bounds into `[min_allowed, max_allowed]`
    ///
    /// Never fails: if the allowed window itself is inverted the result
    /// collapses to the zero-width interval at `min_allowed`.
    pub fn clamp(self, min_allowed: i32, max_allowed: i32) -> Range {
        let min = self.min.max(min_allowed).min(max_allowed);
        let max = self.max.max(min_allowed).min(max_allowed);

        if min >= min_allowed && min <= max {
            Range { min, max }
        } else {
            Range {
                min: min_allowed,
                max: min_allowed,
            }
        }
    }
}

/// Daily macronutrient gram ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRanges {
    #[serde(rename = "carbsG")]
    pub carbs_g: Range,
    #[serde(rename = "proteinG")]
    pub protein_g: Range,
    #[serde(rename = "fatG")]
    pub fat_g: Range,
}

/// Direction of the plan, derived from current vs target weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Lose,
    Maintain,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealTag {
    Balanced,
    HighProtein,
    Vegetarian,
    Halal,
    NoPork,
    NoBeef,
    LowerFat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutIntensity {
    Low,
    Moderate,
    High,
}

/// Display record for a meal; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "approxCalories")]
    pub approx_calories: i32,
    pub tags: Vec<MealTag>,
    #[serde(default)]
    pub substitutions: Vec<MealSuggestion>,
}

/// Display record for a workout; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSuggestion {
    pub id: String,
    pub title: String,
    pub details: String,
    pub intensity: WorkoutIntensity,
    #[serde(default)]
    pub substitutions: Vec<WorkoutSuggestion>,
}

/// Output of the plan engine, rebuilt wholesale on every profile change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayPlan {
    #[serde(rename = "goalType")]
    pub goal_type: GoalType,
    pub bmr: i32,
    pub tdee: i32,
    pub calories: Range,
    pub macros: MacroRanges,
    pub explanation: String,
    pub breakfast: MealSuggestion,
    pub lunch: MealSuggestion,
    pub dinner: MealSuggestion,
    pub workout: WorkoutSuggestion,
    #[serde(rename = "safetyNote")]
    pub safety_note: String,
}
