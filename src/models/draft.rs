//! Profile draft model
//!
//! Accumulates raw form input across a multi-step flow. Every field is an
//! optional string exactly as submitted; nothing is parsed or validated until
//! [`ProfileDraft::build`] turns the draft into a typed [`Profile`]. This is
//! the only place string-to-number parsing happens - the formula layer never
//! sees text.

use serde::{Deserialize, Serialize};

use crate::error::{Field, ValidationError};
use crate::models::profile::{
    Gender, ImperialHeight, ImperialProfile, MetricProfile, Profile, UnitSystem,
};

/// Raw, partially filled form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub unit_system: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
    /// Height in cm (metric) or total inches (imperial)
    pub height: Option<String>,
    /// Imperial alternative to `height`: feet component
    pub feet: Option<String>,
    /// Imperial alternative to `height`: inches component
    pub inches: Option<String>,
    pub waist: Option<String>,
    pub hip: Option<String>,
    pub neck: Option<String>,
}

impl ProfileDraft {
    /// Parse the accumulated input into a typed profile
    ///
    /// Returns the first validation failure encountered, identifying the
    /// offending field. Range checks (positivity, age bounds) are left to the
    /// normalizer; this step only establishes shape and types.
    pub fn build(&self) -> Result<Profile, ValidationError> {
        let unit_system = parse_enum(
            &self.unit_system,
            Field::UnitSystem,
            UnitSystem::from_str,
        )?;
        let gender = parse_enum(&self.gender, Field::Gender, Gender::from_str)?;
        let age = parse_age(&self.age)?;
        let weight = parse_number(&self.weight, Field::Weight)?;
        let waist = parse_number(&self.waist, Field::Waist)?;
        let hip = parse_number(&self.hip, Field::Hip)?;
        let neck = parse_number(&self.neck, Field::Neck)?;

        match unit_system {
            UnitSystem::Metric => {
                let height_cm = parse_number(&self.height, Field::Height)?;
                Ok(Profile::Metric(MetricProfile {
                    gender,
                    age,
                    weight_kg: weight,
                    height_cm,
                    waist_cm: waist,
                    hip_cm: hip,
                    neck_cm: neck,
                }))
            }
            UnitSystem::Imperial => {
                let height = self.parse_imperial_height()?;
                Ok(Profile::Imperial(ImperialProfile {
                    gender,
                    age,
                    weight_lb: weight,
                    height,
                    waist_in: waist,
                    hip_in: hip,
                    neck_in: neck,
                }))
            }
        }
    }

    /// Imperial height accepts either a total-inches value or a feet+inches
    /// pair; the pair wins when both are present.
    fn parse_imperial_height(&self) -> Result<ImperialHeight, ValidationError> {
        if self.feet.is_some() || self.inches.is_some() {
            let feet = parse_number(&self.feet, Field::Feet)?;
            let inches = match &self.inches {
                Some(_) => parse_number(&self.inches, Field::Inches)?,
                None => 0.0,
            };
            return Ok(ImperialHeight::FeetInches { feet, inches });
        }

        let total = parse_number(&self.height, Field::Height)?;
        Ok(ImperialHeight::Inches(total))
    }
}

fn parse_enum<T>(
    raw: &Option<String>,
    field: Field,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let value = raw.as_deref().ok_or(ValidationError::Missing(field))?;
    parse(value.trim()).ok_or_else(|| ValidationError::UnknownVariant {
        field,
        value: value.to_string(),
    })
}

fn parse_number(raw: &Option<String>, field: Field) -> Result<f64, ValidationError> {
    let value = raw.as_deref().ok_or(ValidationError::Missing(field))?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: value.to_string(),
        })
}

fn parse_age(raw: &Option<String>) -> Result<u32, ValidationError> {
    let value = raw.as_deref().ok_or(ValidationError::Missing(Field::Age))?;
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::NotANumber {
            field: Field::Age,
            value: value.to_string(),
        })
}
