//! Body-composition module
//!
//! Handles unit normalization and the derived-metric formulas.
//!
//! [`analyze`] is the main entry point: it accepts a profile in either unit
//! system, normalizes it to metric, and computes the full result. Each call
//! is independent and stateless, so callers may run any number of them
//! concurrently without coordination.

pub mod calculator;
pub mod normalizer;
pub mod ranges;
pub mod units;

pub use calculator::{body_mass_index, compute, mifflin_st_jeor, navy_body_fat};
pub use normalizer::normalize;
pub use ranges::{annotate, AnnotatedMetric, NormalRange, RangeReport, RangeStatus};

use crate::error::CompositionError;
use crate::models::{CompositionResult, Profile};

/// Normalize a profile and compute its composition result
pub fn analyze(profile: &Profile) -> Result<CompositionResult, CompositionError> {
    let metric = normalizer::normalize(profile)?;
    let result = calculator::compute(&metric)?;

    tracing::debug!(
        bmi = result.bmi,
        fat_percentage = result.fat_percentage,
        bmr_kcal = result.basal_metabolic_rate_kcal,
        "computed body composition"
    );

    Ok(result)
}
