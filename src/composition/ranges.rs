//! Normative-range annotator
//!
//! Attaches approximate "normal" bands to computed metrics for comparative
//! display. The bands are hard-coded heuristics (BMI 18.5-24.9 and similar),
//! presentation logic layered over the calculator output - they are not part
//! of the calculation contract.

use serde::{Deserialize, Serialize};

use crate::models::{CompositionResult, Gender};

const BMI_LOW: f64 = 18.5;
const BMI_HIGH: f64 = 24.9;

/// An inclusive low/high band for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub low: f64,
    pub high: f64,
}

impl NormalRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn status(&self, value: f64) -> RangeStatus {
        if value < self.low {
            RangeStatus::Below
        } else if value > self.high {
            RangeStatus::Above
        } else {
            RangeStatus::Within
        }
    }
}

/// Where a value falls relative to its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStatus {
    Below,
    Within,
    Above,
}

/// A metric value together with its band and classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedMetric {
    pub value: f64,
    pub range: NormalRange,
    pub status: RangeStatus,
}

impl AnnotatedMetric {
    fn new(value: f64, range: NormalRange) -> Self {
        Self {
            value,
            range,
            status: range.status(value),
        }
    }
}

/// Range annotations for the metrics that have meaningful bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    pub bmi: AnnotatedMetric,
    pub weight_kg: AnnotatedMetric,
    pub fat_percentage: AnnotatedMetric,
    pub total_body_water_l: AnnotatedMetric,
}

/// Annotate a result with heuristic normal bands
///
/// Height is needed to derive the healthy-weight band from the BMI band;
/// weight is read from the result itself.
pub fn annotate(result: &CompositionResult, gender: Gender, height_cm: f64) -> RangeReport {
    let bmi_range = NormalRange {
        low: BMI_LOW,
        high: BMI_HIGH,
    };

    // Healthy weight is the BMI band solved for weight at this height.
    let height_m = height_cm / 100.0;
    let weight_range = NormalRange {
        low: BMI_LOW * height_m * height_m,
        high: BMI_HIGH * height_m * height_m,
    };

    let fat_range = match gender {
        Gender::Male => NormalRange { low: 8.0, high: 20.0 },
        Gender::Female => NormalRange {
            low: 21.0,
            high: 33.0,
        },
    };

    // Hydration band expressed as a share of body weight.
    let water_fraction = match gender {
        Gender::Male => (0.50, 0.65),
        Gender::Female => (0.45, 0.60),
    };
    let water_range = NormalRange {
        low: result.weight_kg * water_fraction.0,
        high: result.weight_kg * water_fraction.1,
    };

    RangeReport {
        bmi: AnnotatedMetric::new(result.bmi, bmi_range),
        weight_kg: AnnotatedMetric::new(result.weight_kg, weight_range),
        fat_percentage: AnnotatedMetric::new(result.fat_percentage, fat_range),
        total_body_water_l: AnnotatedMetric::new(result.total_body_water_l, water_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::calculator::compute;
    use crate::models::MetricProfile;

    fn male_result() -> CompositionResult {
        compute(&MetricProfile {
            gender: Gender::Male,
            age: 25,
            weight_kg: 80.0,
            height_cm: 176.0,
            waist_cm: 81.0,
            hip_cm: 101.0,
            neck_cm: 42.0,
        })
        .unwrap()
    }

    #[test]
    fn test_range_status() {
        let range = NormalRange {
            low: 18.5,
            high: 24.9,
        };
        assert_eq!(range.status(17.0), RangeStatus::Below);
        assert_eq!(range.status(22.0), RangeStatus::Within);
        assert_eq!(range.status(25.83), RangeStatus::Above);
        assert!(range.contains(18.5));
        assert!(range.contains(24.9));
        assert!(!range.contains(24.91));
    }

    #[test]
    fn test_bmi_band_is_fixed() {
        let report = annotate(&male_result(), Gender::Male, 176.0);
        assert_eq!(report.bmi.range.low, 18.5);
        assert_eq!(report.bmi.range.high, 24.9);
        // Scenario A sits just above the healthy band.
        assert_eq!(report.bmi.status, RangeStatus::Above);
    }

    #[test]
    fn test_weight_band_derived_from_height() {
        let report = annotate(&male_result(), Gender::Male, 176.0);
        // 18.5 * 1.76^2 = ~57.31 kg, 24.9 * 1.76^2 = ~77.13 kg
        assert!((report.weight_kg.range.low - 57.3056).abs() < 0.001);
        assert!((report.weight_kg.range.high - 77.13024).abs() < 0.001);
        assert_eq!(report.weight_kg.status, RangeStatus::Above);
    }

    #[test]
    fn test_fat_band_by_gender() {
        let result = male_result();
        let male = annotate(&result, Gender::Male, 176.0);
        let female = annotate(&result, Gender::Female, 176.0);
        assert_eq!(male.fat_percentage.range.low, 8.0);
        assert_eq!(male.fat_percentage.range.high, 20.0);
        assert_eq!(female.fat_percentage.range.low, 21.0);
        assert_eq!(female.fat_percentage.range.high, 33.0);

        // ~16.3% is within the male band, below the female one.
        assert_eq!(male.fat_percentage.status, RangeStatus::Within);
        assert_eq!(female.fat_percentage.status, RangeStatus::Below);
    }

    #[test]
    fn test_water_band_scales_with_weight() {
        let report = annotate(&male_result(), Gender::Male, 176.0);
        assert!((report.total_body_water_l.range.low - 40.0).abs() < 1e-9);
        assert!((report.total_body_water_l.range.high - 52.0).abs() < 1e-9);
        assert_eq!(report.total_body_water_l.status, RangeStatus::Within);
    }
}
