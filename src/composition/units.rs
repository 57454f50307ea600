//! Unit conversion constants and helpers
//!
//! All formulas run in metric (kg, cm, L). Imperial input is converted on
//! ingress and results may be projected back for display on egress.

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;
/// Fluid ounces (US) per liter
pub const FL_OZ_PER_L: f64 = 33.814;

// ============================================================================
// Conversions
// ============================================================================

/// Convert pounds to kilograms
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Convert kilograms to pounds
pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Convert inches to centimeters
pub fn in_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

/// Convert centimeters to inches
pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_IN
}

/// Convert liters to US fluid ounces
pub fn l_to_fl_oz(liters: f64) -> f64 {
    liters * FL_OZ_PER_L
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lb_to_kg() {
        assert!((lb_to_kg(176.37) - 80.0).abs() < 0.001);
        assert!((lb_to_kg(1.0) - 0.453592).abs() < 1e-9);
    }

    #[test]
    fn test_in_to_cm() {
        assert!((in_to_cm(1.0) - 2.54).abs() < 1e-9);
        assert!((in_to_cm(69.29133858267717) - 176.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_round_trip() {
        // metric -> imperial -> metric within 1e-6 relative
        let kg = 83.7;
        let back = lb_to_kg(kg_to_lb(kg));
        assert!(((back - kg) / kg).abs() < 1e-6);
    }

    #[test]
    fn test_linear_round_trip() {
        let cm = 176.0;
        let back = in_to_cm(cm_to_in(cm));
        assert!(((back - cm) / cm).abs() < 1e-6);
    }

    #[test]
    fn test_l_to_fl_oz() {
        assert!((l_to_fl_oz(1.0) - 33.814).abs() < 1e-9);
    }
}
