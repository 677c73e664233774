use crate::models::Sex;

/// Bounds for the weight-only fallback estimate
const FALLBACK_MIN_KCAL: i32 = 900;
const FALLBACK_MAX_KCAL: i32 = 3000;

/// Bounds for the age-band estimate
const BANDED_MIN_KCAL: i32 = 900;
const BANDED_MAX_KCAL: i32 = 3500;

/// Fallback energy density used when sex or age is unknown (kcal/kg/day)
const FALLBACK_KCAL_PER_KG: f64 = 22.0;

/// Estimate basal metabolic rate in kcal/day from weight, sex and age
///
/// With sex and age known this applies a weight-only piecewise linear model
/// by age band (bands are checked in ascending order with strict `<`, so the
/// boundary ages 10, 18, 30 and 60 fall into the next band). Without them it
/// returns `round(22 * weight)` clamped to `[900, 3000]`.
///
/// # Panics
/// If `weight_kg` is not strictly positive. Callers validate weights before
/// reaching this point.
pub fn estimate(weight_kg: f64, sex: Sex, age_years: Option<u32>) -> i32 {
    assert!(weight_kg > 0.0, "weight_kg must be positive, got {}", weight_kg);

    let age = match (sex, age_years) {
        (Sex::Unspecified, _) | (_, None) => return fallback_estimate(weight_kg),
        (_, Some(age)) => age,
    };

    let (slope, intercept) = match sex {
        Sex::Male => male_coefficients(age),
        Sex::Female => female_coefficients(age),
        Sex::Unspecified => (FALLBACK_KCAL_PER_KG, 0.0),
    };

    let bmr = (slope * weight_kg + intercept) as i32;
    bmr.clamp(BANDED_MIN_KCAL, BANDED_MAX_KCAL)
}

#[inline]
fn fallback_estimate(weight_kg: f64) -> i32 {
    let bmr = (FALLBACK_KCAL_PER_KG * weight_kg).round() as i32;
    bmr.clamp(FALLBACK_MIN_KCAL, FALLBACK_MAX_KCAL)
}

#[inline]
fn male_coefficients(age: u32) -> (f64, f64) {
    match age {
        a if a < 10 => (22.7, 495.0),
        a if a < 18 => (17.5, 651.0),
        a if a < 30 => (15.3, 679.0),
        a if a < 60 => (11.6, 879.0),
        _ => (13.5, 487.0),
    }
}

#[inline]
fn female_coefficients(age: u32) -> (f64, f64) {
    match age {
        a if a < 10 => (22.5, 499.0),
        a if a < 18 => (12.2, 746.0),
        a if a < 30 => (14.7, 496.0),
        a if a < 60 => (8.7, 829.0),
        _ => (10.5, 596.0),
    }
}
