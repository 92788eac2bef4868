//! # chemlab-core
//!
//! Core library for the ChemLab experiment service. Implements the
//! acid-base neutralization, serial dilution, and ideal gas law
//! calculators plus the dispatch layer that routes tagged requests.

pub mod acid_base;
pub mod constants;
pub mod dilution;
pub mod dispatch;
pub mod error;
pub mod experiment;
pub mod gas_law;

// Re-exports
pub use dispatch::{run, run_json};
pub use error::ChemError;
pub use experiment::{ExperimentKind, ExperimentRequest, ExperimentResult};

/// Compute the pH of mixing a strong acid with a strong base.
///
/// This is a convenience function for simple use cases. For the full
/// tagged request/result model (labels, classification strings), use
/// [`dispatch::run`].
///
/// # Example
/// ```
/// let ph = chemlab_core::neutralization_ph(1.0, 100.0, 1.0, 100.0).unwrap();
/// assert!((ph - 7.0).abs() < f64::EPSILON);
/// ```
pub fn neutralization_ph(
    acid_molarity: f64,
    acid_volume_ml: f64,
    base_molarity: f64,
    base_volume_ml: f64,
) -> error::Result<f64> {
    let params = acid_base::AcidBaseParams {
        acid: "acid".to_string(),
        base: "base".to_string(),
        acid_molarity,
        acid_volume_ml,
        base_molarity,
        base_volume_ml,
    };
    Ok(acid_base::neutralize(&params)?.ph)
}
