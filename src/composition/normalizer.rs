//! Unit normalizer
//!
//! Validates a profile and expresses it entirely in metric units. This is the
//! only ingress point to the calculator: every rejection happens here, before
//! any formula runs, and identifies the offending field. No clamping, no
//! silent defaulting.

use crate::error::{Field, ValidationError};
use crate::models::{ImperialHeight, ImperialProfile, MetricProfile, Profile};

use super::units::{in_to_cm, lb_to_kg};

/// Validate a profile and return its metric equivalent
///
/// Metric input passes through unchanged; imperial input is converted
/// (`kg = lb * 0.453592`, `cm = in * 2.54`, feet+inches combined first).
pub fn normalize(profile: &Profile) -> Result<MetricProfile, ValidationError> {
    match profile {
        Profile::Metric(p) => {
            validate_metric(p)?;
            Ok(*p)
        }
        Profile::Imperial(p) => normalize_imperial(p),
    }
}

/// Range checks for an already-metric profile
pub fn validate_metric(profile: &MetricProfile) -> Result<(), ValidationError> {
    validate_age(profile.age)?;
    validate_positive(profile.weight_kg, Field::Weight)?;
    validate_positive(profile.height_cm, Field::Height)?;
    validate_positive(profile.waist_cm, Field::Waist)?;
    validate_positive(profile.hip_cm, Field::Hip)?;
    validate_positive(profile.neck_cm, Field::Neck)?;
    Ok(())
}

fn normalize_imperial(profile: &ImperialProfile) -> Result<MetricProfile, ValidationError> {
    validate_age(profile.age)?;
    validate_positive(profile.weight_lb, Field::Weight)?;
    validate_imperial_height(&profile.height)?;
    validate_positive(profile.waist_in, Field::Waist)?;
    validate_positive(profile.hip_in, Field::Hip)?;
    validate_positive(profile.neck_in, Field::Neck)?;

    let metric = MetricProfile {
        gender: profile.gender,
        age: profile.age,
        weight_kg: lb_to_kg(profile.weight_lb),
        height_cm: in_to_cm(profile.height.total_inches()),
        waist_cm: in_to_cm(profile.waist_in),
        hip_cm: in_to_cm(profile.hip_in),
        neck_cm: in_to_cm(profile.neck_in),
    };

    tracing::debug!(
        weight_kg = metric.weight_kg,
        height_cm = metric.height_cm,
        "converted imperial profile to metric"
    );

    Ok(metric)
}

fn validate_imperial_height(height: &ImperialHeight) -> Result<(), ValidationError> {
    if let ImperialHeight::FeetInches { feet, inches } = height {
        // Components may individually be zero (6 ft 0 in) but never negative.
        if !feet.is_finite() || *feet < 0.0 {
            return Err(ValidationError::NonPositive(Field::Feet));
        }
        if !inches.is_finite() || *inches < 0.0 {
            return Err(ValidationError::NonPositive(Field::Inches));
        }
    }
    validate_positive(height.total_inches(), Field::Height)
}

fn validate_positive(value: f64, field: Field) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NonPositive(field));
    }
    Ok(())
}

fn validate_age(age: u32) -> Result<(), ValidationError> {
    if !(1..=120).contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(())
}
