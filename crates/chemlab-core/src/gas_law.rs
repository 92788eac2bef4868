//! Ideal gas law calculator.
//!
//! Solves PV = nRT for volume, plus a display scale factor used to size
//! the rendered balloon.

use serde::{Deserialize, Serialize};

use crate::constants::{GAS_CONSTANT, VOLUME_DISPLAY_DIVISOR};
use crate::error::{ChemError, Result};

/// Parameters for an ideal gas law run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasLawParams {
    /// Pressure in atm.
    #[serde(rename = "P")]
    pub pressure_atm: f64,
    /// Amount of gas in moles.
    #[serde(rename = "n")]
    pub moles: f64,
    /// Temperature in kelvin.
    #[serde(rename = "T")]
    pub temperature_k: f64,
}

/// Computed outcome of an ideal gas law run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasLawOutcome {
    /// Pressure echoed from the request.
    #[serde(rename = "P")]
    pub pressure_atm: f64,
    /// Moles echoed from the request.
    #[serde(rename = "n")]
    pub moles: f64,
    /// Temperature echoed from the request.
    #[serde(rename = "T")]
    pub temperature_k: f64,
    /// Volume in liters.
    #[serde(rename = "V")]
    pub volume_l: f64,
    /// Display scale factor (volume / 10).
    pub scale: f64,
}

/// Solve the ideal gas law for volume.
pub fn ideal_volume(params: &GasLawParams) -> Result<GasLawOutcome> {
    if params.pressure_atm == 0.0 {
        return Err(ChemError::domain("pressure must be nonzero"));
    }

    // V = nRT / P
    let volume_l = (params.moles * GAS_CONSTANT * params.temperature_k) / params.pressure_atm;
    let scale = volume_l / VOLUME_DISPLAY_DIVISOR;

    Ok(GasLawOutcome {
        pressure_atm: params.pressure_atm,
        moles: params.moles,
        temperature_k: params.temperature_k,
        volume_l,
        scale,
    })
}
