//! Data models
//!
//! Rust structs representing profile input and derived results.

mod draft;
mod profile;
mod result;

pub use draft::ProfileDraft;
pub use profile::{Gender, ImperialHeight, ImperialProfile, MetricProfile, Profile, UnitSystem};
pub use result::{CompositionResult, ImperialComposition};
