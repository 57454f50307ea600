//! Error types
//!
//! Validation errors name the offending input field; domain errors signal a
//! formula precondition failure. Both are raised synchronously and neither is
//! ever retried - a deterministic computation that rejected its input cannot
//! succeed without new input.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input fields of an anthropometric profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    UnitSystem,
    Gender,
    Age,
    Weight,
    Height,
    Feet,
    Inches,
    Waist,
    Hip,
    Neck,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::UnitSystem => "unit_system",
            Field::Gender => "gender",
            Field::Age => "age",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Feet => "feet",
            Field::Inches => "inches",
            Field::Waist => "waist",
            Field::Hip => "hip",
            Field::Neck => "neck",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input rejected before any formula runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("required field '{0}' is missing")]
    Missing(Field),

    #[error("field '{field}' must be a number, got '{value}'")]
    NotANumber { field: Field, value: String },

    #[error("field '{0}' must be positive")]
    NonPositive(Field),

    #[error("field 'age' must be between 1 and 120 years, got {0}")]
    AgeOutOfRange(u32),

    #[error("field '{field}' does not accept '{value}'")]
    UnknownVariant { field: Field, value: String },
}

/// Formula precondition failed; the result would be mathematically undefined
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("waist ({waist_cm} cm) must exceed neck ({neck_cm} cm) for the male body-fat formula")]
    WaistNotAboveNeck { waist_cm: f64, neck_cm: f64 },

    #[error(
        "waist + hip ({girth_cm} cm) must exceed neck ({neck_cm} cm) for the female body-fat formula"
    )]
    GirthNotAboveNeck { girth_cm: f64, neck_cm: f64 },
}

/// Any failure producing a composition result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display() {
        assert_eq!(Field::UnitSystem.to_string(), "unit_system");
        assert_eq!(Field::Waist.to_string(), "waist");
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::Missing(Field::Neck);
        assert!(err.to_string().contains("'neck'"));

        let err = ValidationError::NonPositive(Field::Weight);
        assert!(err.to_string().contains("'weight'"));
    }

    #[test]
    fn test_composition_error_from() {
        let err: CompositionError = ValidationError::Missing(Field::Age).into();
        assert!(matches!(err, CompositionError::Validation(_)));

        let err: CompositionError = DomainError::WaistNotAboveNeck {
            waist_cm: 40.0,
            neck_cm: 42.0,
        }
        .into();
        assert!(matches!(err, CompositionError::Domain(_)));
    }
}
