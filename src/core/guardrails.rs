use crate::models::{MacroRanges, Range, Sex};

/// Absolute daily intake floor regardless of sex
pub const ABSOLUTE_MIN_KCAL: i32 = 900;
/// Absolute daily intake ceiling
pub const ABSOLUTE_MAX_KCAL: i32 = 4500;
/// Widest calorie band a plan may propose
pub const MAX_RANGE_WIDTH_KCAL: i32 = 1200;

/// Outcome of a guardrail check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub reason: Option<&'static str>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self { ok: true, reason: None }
    }

    pub fn fail(reason: &'static str) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
        }
    }
}

/// Conservative minimum daily intake by sex
#[inline]
pub fn min_intake_by_sex(sex: Sex) -> i32 {
    match sex {
        Sex::Male => 1500,
        Sex::Female | Sex::Unspecified => 1200,
    }
}

/// Reject degenerate calorie ranges
///
/// Checks run in a fixed order and the first failure wins.
pub fn validate_calorie_range(range: &Range, sex: Sex) -> ValidationResult {
    if range.max() < min_intake_by_sex(sex) {
        return ValidationResult::fail("Below minimum intake");
    }
    if range.min() < ABSOLUTE_MIN_KCAL {
        return ValidationResult::fail("Extremely low");
    }
    if range.max() > ABSOLUTE_MAX_KCAL {
        return ValidationResult::fail("Extremely high");
    }
    if range.width() > MAX_RANGE_WIDTH_KCAL {
        return ValidationResult::fail("Too wide");
    }
    ValidationResult::pass()
}

pub fn validate_macros(macros: &MacroRanges) -> ValidationResult {
    if macros.carbs_g.min() < 0 || macros.protein_g.min() < 0 || macros.fat_g.min() < 0 {
        return ValidationResult::fail("Negative macros");
    }
    ValidationResult::pass()
}
