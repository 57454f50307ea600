//! Composition result model
//!
//! The derived metrics for one profile. Always produced in metric units;
//! [`CompositionResult::to_imperial`] gives a display projection for callers
//! rendering in pounds and fluid ounces. Results are transient values - this
//! crate never persists them.

use serde::{Deserialize, Serialize};

use crate::composition::units::{kg_to_lb, l_to_fl_oz};

/// Derived body-composition metrics, metric units throughout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionResult {
    pub bmi: f64,
    pub weight_kg: f64,
    pub fat_mass_kg: f64,
    pub fat_percentage: f64,
    pub lean_mass_kg: f64,
    pub active_cell_mass_kg: f64,
    pub total_body_water_l: f64,
    pub extracellular_water_l: f64,
    pub intracellular_water_l: f64,
    pub basal_metabolic_rate_kcal: f64,
}

impl CompositionResult {
    /// Project into imperial display units (lb, fl oz)
    ///
    /// BMI, percentages, and kcal are unit-free and carried over unchanged.
    pub fn to_imperial(&self) -> ImperialComposition {
        ImperialComposition {
            bmi: self.bmi,
            weight_lb: kg_to_lb(self.weight_kg),
            fat_mass_lb: kg_to_lb(self.fat_mass_kg),
            fat_percentage: self.fat_percentage,
            lean_mass_lb: kg_to_lb(self.lean_mass_kg),
            active_cell_mass_lb: kg_to_lb(self.active_cell_mass_kg),
            total_body_water_fl_oz: l_to_fl_oz(self.total_body_water_l),
            extracellular_water_fl_oz: l_to_fl_oz(self.extracellular_water_l),
            intracellular_water_fl_oz: l_to_fl_oz(self.intracellular_water_l),
            basal_metabolic_rate_kcal: self.basal_metabolic_rate_kcal,
        }
    }
}

/// Display projection of a [`CompositionResult`] in imperial units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImperialComposition {
    pub bmi: f64,
    pub weight_lb: f64,
    pub fat_mass_lb: f64,
    pub fat_percentage: f64,
    pub lean_mass_lb: f64,
    pub active_cell_mass_lb: f64,
    pub total_body_water_fl_oz: f64,
    pub extracellular_water_fl_oz: f64,
    pub intracellular_water_fl_oz: f64,
    pub basal_metabolic_rate_kcal: f64,
}
