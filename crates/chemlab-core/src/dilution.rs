//! Serial dilution calculator.
//!
//! Applies C1·V1 = C2·V2 to find the concentration after a volume
//! change, plus a clamped fill percentage used to size the rendered
//! tube.

use serde::{Deserialize, Serialize};

use crate::constants::{FILL_MAX_PERCENT, FILL_MIN_PERCENT};
use crate::error::{ChemError, Result};

/// Parameters for a dilution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionParams {
    /// Solute label (display only).
    #[serde(default = "default_solute")]
    pub solute: String,
    /// Initial concentration.
    pub c1: f64,
    /// Initial volume.
    pub v1: f64,
    /// Final volume.
    pub v2: f64,
}

/// Computed outcome of a dilution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionOutcome {
    /// Solute label echoed from the request.
    pub solute: String,
    /// Initial concentration echoed from the request.
    pub c1: f64,
    /// Initial volume echoed from the request.
    pub v1: f64,
    /// Final volume echoed from the request.
    pub v2: f64,
    /// Final concentration.
    pub c2: f64,
    /// Display fill percentage, clamped to [10, 100].
    pub fill_percent: f64,
}

fn default_solute() -> String {
    "Solution".to_string()
}

/// Dilute the solution to the final volume.
pub fn dilute(params: &DilutionParams) -> Result<DilutionOutcome> {
    if params.v2 == 0.0 {
        return Err(ChemError::domain("final volume must be nonzero"));
    }

    // C1 V1 = C2 V2  ->  C2 = (C1 * V1) / V2
    let c2 = (params.c1 * params.v1) / params.v2;

    // Fill floor of 10 keeps the tube visible even for c1 <= 0.
    let fill_percent = if params.c1 > 0.0 {
        ((c2 / params.c1) * 100.0).clamp(FILL_MIN_PERCENT, FILL_MAX_PERCENT)
    } else {
        FILL_MIN_PERCENT
    };

    Ok(DilutionOutcome {
        solute: params.solute.clone(),
        c1: params.c1,
        v1: params.v1,
        v2: params.v2,
        c2,
        fill_percent,
    })
}
