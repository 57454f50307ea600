//! Body-composition calculator
//!
//! Closed-form physiological formulas over a validated metric profile. Pure
//! and deterministic: no I/O, no hidden state, identical input yields
//! bit-identical output. Either a complete [`CompositionResult`] is produced
//! or a single error is returned - there are no partial results.
//!
//! Formulas:
//! - BMI: weight / height² (metric)
//! - Body fat: U.S. Navy circumference method (base-10 logarithms)
//! - Mass/water compartments: fixed fractions of lean mass
//! - Basal metabolic rate: Mifflin-St Jeor (1990)

use crate::error::{CompositionError, DomainError};
use crate::models::{CompositionResult, Gender, MetricProfile};

use super::normalizer::validate_metric;

/// Metabolically active tissue as a fraction of lean mass
const ACTIVE_CELL_MASS_FACTOR: f64 = 0.70;
/// Total body water as a fraction of lean mass
const TOTAL_BODY_WATER_FACTOR: f64 = 0.73;
/// Extracellular share of total body water
const EXTRACELLULAR_FRACTION: f64 = 0.40;
/// Intracellular share of total body water
const INTRACELLULAR_FRACTION: f64 = 0.60;

/// Compute the full set of derived metrics for a metric profile
///
/// Input is re-validated so a hand-constructed [`MetricProfile`] cannot reach
/// the formulas with non-positive values. Formula preconditions (positive
/// logarithm arguments) surface as [`DomainError`] rather than NaN.
pub fn compute(profile: &MetricProfile) -> Result<CompositionResult, CompositionError> {
    validate_metric(profile)?;

    let bmi = body_mass_index(profile.weight_kg, profile.height_cm);
    let fat_percentage = navy_body_fat(profile)?;

    let fat_mass_kg = fat_percentage / 100.0 * profile.weight_kg;
    let lean_mass_kg = profile.weight_kg - fat_mass_kg;
    let active_cell_mass_kg = lean_mass_kg * ACTIVE_CELL_MASS_FACTOR;
    let total_body_water_l = lean_mass_kg * TOTAL_BODY_WATER_FACTOR;
    let extracellular_water_l = total_body_water_l * EXTRACELLULAR_FRACTION;
    let intracellular_water_l = total_body_water_l * INTRACELLULAR_FRACTION;

    let basal_metabolic_rate_kcal = mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );

    Ok(CompositionResult {
        bmi,
        weight_kg: profile.weight_kg,
        fat_mass_kg,
        fat_percentage,
        lean_mass_kg,
        active_cell_mass_kg,
        total_body_water_l,
        extracellular_water_l,
        intracellular_water_l,
        basal_metabolic_rate_kcal,
    })
}

/// Body Mass Index: weight (kg) over height (m) squared
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Body-fat percentage via the U.S. Navy circumference method
///
/// The male formula needs `waist - neck > 0`, the female formula
/// `waist + hip - neck > 0`; otherwise the logarithm is undefined and a
/// [`DomainError`] is returned.
pub fn navy_body_fat(profile: &MetricProfile) -> Result<f64, DomainError> {
    match profile.gender {
        Gender::Male => {
            let girth = profile.waist_cm - profile.neck_cm;
            if girth <= 0.0 {
                return Err(DomainError::WaistNotAboveNeck {
                    waist_cm: profile.waist_cm,
                    neck_cm: profile.neck_cm,
                });
            }
            Ok(86.010 * girth.log10() - 70.041 * profile.height_cm.log10() + 36.76)
        }
        Gender::Female => {
            let girth = profile.waist_cm + profile.hip_cm - profile.neck_cm;
            if girth <= 0.0 {
                return Err(DomainError::GirthNotAboveNeck {
                    girth_cm: girth,
                    neck_cm: profile.neck_cm,
                });
            }
            Ok(163.205 * girth.log10() - 97.684 * profile.height_cm.log10() - 78.387)
        }
    }
}

/// Basal metabolic rate via the Mifflin-St Jeor equation (kcal/day)
///
/// `10*weight + 6.25*height - 5*age`, plus 5 for men or minus 161 for women.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}
