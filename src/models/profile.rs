//! Anthropometric profile model
//!
//! Represents one set of body measurements in either unit system. The unit
//! system is encoded in the type: a [`MetricProfile`] is always kg/cm, an
//! [`ImperialProfile`] is always lb/in, and [`Profile`] is the tagged union
//! over the two. Formulas never see imperial values; conversion happens once
//! at the boundary (see [`crate::composition::normalizer`]).

use serde::{Deserialize, Serialize};

use crate::composition::units::IN_PER_FT;

/// Unit system enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Some(UnitSystem::Metric),
            "imperial" | "us" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// Gender for the body-fat and basal-metabolic-rate formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Height input for imperial profiles
///
/// Forms commonly collect height as a feet+inches pair; both shapes are
/// accepted and combined to total inches before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImperialHeight {
    Inches(f64),
    FeetInches { feet: f64, inches: f64 },
}

impl ImperialHeight {
    /// Total height in inches (`feet*12 + inches` for the pair form)
    pub fn total_inches(&self) -> f64 {
        match self {
            ImperialHeight::Inches(inches) => *inches,
            ImperialHeight::FeetInches { feet, inches } => feet * IN_PER_FT + inches,
        }
    }
}

/// Measurements in kilograms and centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricProfile {
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: f64,
    pub neck_cm: f64,
}

/// Measurements in pounds and inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImperialProfile {
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    pub weight_lb: f64,
    pub height: ImperialHeight,
    pub waist_in: f64,
    pub hip_in: f64,
    pub neck_in: f64,
}

/// An anthropometric profile in either unit system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit_system", rename_all = "lowercase")]
pub enum Profile {
    Metric(MetricProfile),
    Imperial(ImperialProfile),
}

impl Profile {
    pub fn unit_system(&self) -> UnitSystem {
        match self {
            Profile::Metric(_) => UnitSystem::Metric,
            Profile::Imperial(_) => UnitSystem::Imperial,
        }
    }

    pub fn gender(&self) -> Gender {
        match self {
            Profile::Metric(p) => p.gender,
            Profile::Imperial(p) => p.gender,
        }
    }
}
