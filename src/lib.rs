//! Body Composition Engine
//!
//! Deterministic body-composition statistics from anthropometric
//! measurements: BMI, U.S. Navy body-fat percentage, lean/fat mass, body
//! water compartments, and Mifflin-St Jeor basal metabolic rate.
//!
//! Input arrives in either unit system (metric or imperial, including
//! feet+inches height); all formulas run in metric after a single validated
//! conversion at the boundary. Results can be projected back to imperial for
//! display.
//!
//! ```
//! use bodycomp::models::{Gender, MetricProfile, Profile};
//!
//! let profile = Profile::Metric(MetricProfile {
//!     gender: Gender::Male,
//!     age: 25,
//!     weight_kg: 80.0,
//!     height_cm: 176.0,
//!     waist_cm: 81.0,
//!     hip_cm: 101.0,
//!     neck_cm: 42.0,
//! });
//!
//! let result = bodycomp::analyze(&profile).unwrap();
//! assert_eq!(result.basal_metabolic_rate_kcal, 1780.0);
//! ```

pub mod composition;
pub mod error;
pub mod models;

pub use composition::{analyze, annotate, compute, normalize};
pub use error::{CompositionError, DomainError, Field, ValidationError};
pub use models::{CompositionResult, Profile, ProfileDraft};
