//! Experiment request and result model.
//!
//! Requests arrive tagged with an `experiment` field naming one of the
//! closed set of calculators; results mirror the tag and echo the
//! request parameters alongside the computed outputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::acid_base::{AcidBaseOutcome, AcidBaseParams};
use crate::dilution::{DilutionOutcome, DilutionParams};
use crate::error::{ChemError, Result};
use crate::gas_law::{GasLawOutcome, GasLawParams};

/// The closed set of experiment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperimentKind {
    /// Acid-base neutralization pH.
    AcidBase,
    /// Serial dilution.
    Dilution,
    /// Ideal gas law.
    GasLaw,
}

impl ExperimentKind {
    /// Wire tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AcidBase => "acid_base",
            Self::Dilution => "dilution",
            Self::GasLaw => "gas_law",
        }
    }

    /// All known wire tags.
    #[must_use]
    pub fn available() -> &'static [&'static str] {
        &["acid_base", "dilution", "gas_law"]
    }
}

impl FromStr for ExperimentKind {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "acid_base" => Ok(Self::AcidBase),
            "dilution" => Ok(Self::Dilution),
            "gas_law" => Ok(Self::GasLaw),
            other => Err(ChemError::UnknownExperiment(other.to_string())),
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged experiment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "experiment")]
pub enum ExperimentRequest {
    /// Acid-base neutralization parameters.
    #[serde(rename = "acid_base")]
    AcidBase(AcidBaseParams),
    /// Dilution parameters.
    #[serde(rename = "dilution")]
    Dilution(DilutionParams),
    /// Ideal gas law parameters.
    #[serde(rename = "gas_law")]
    GasLaw(GasLawParams),
}

impl ExperimentRequest {
    /// The kind this request is tagged with.
    #[must_use]
    pub fn kind(&self) -> ExperimentKind {
        match self {
            Self::AcidBase(_) => ExperimentKind::AcidBase,
            Self::Dilution(_) => ExperimentKind::Dilution,
            Self::GasLaw(_) => ExperimentKind::GasLaw,
        }
    }

    /// Parse a wire-level JSON body of the form `{"experiment": tag, ...}`.
    ///
    /// Performed in two steps so that an unrecognized tag surfaces as
    /// [`ChemError::UnknownExperiment`] while a missing or mistyped
    /// parameter surfaces as [`ChemError::InvalidParams`].
    pub fn from_json(body: &serde_json::Value) -> Result<Self> {
        let tag = body
            .get("experiment")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                ChemError::InvalidParams("missing string field `experiment`".to_string())
            })?;

        match tag.parse::<ExperimentKind>()? {
            ExperimentKind::AcidBase => Ok(Self::AcidBase(parse_params(body)?)),
            ExperimentKind::Dilution => Ok(Self::Dilution(parse_params(body)?)),
            ExperimentKind::GasLaw => Ok(Self::GasLaw(parse_params(body)?)),
        }
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(body: &serde_json::Value) -> Result<T> {
    serde_json::from_value(body.clone()).map_err(|e| ChemError::InvalidParams(e.to_string()))
}

/// A tagged experiment result, mirroring the request kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "experiment")]
pub enum ExperimentResult {
    /// Acid-base neutralization outcome.
    #[serde(rename = "acid_base")]
    AcidBase(AcidBaseOutcome),
    /// Dilution outcome.
    #[serde(rename = "dilution")]
    Dilution(DilutionOutcome),
    /// Ideal gas law outcome.
    #[serde(rename = "gas_law")]
    GasLaw(GasLawOutcome),
}

impl ExperimentResult {
    /// The kind this result is tagged with.
    #[must_use]
    pub fn kind(&self) -> ExperimentKind {
        match self {
            Self::AcidBase(_) => ExperimentKind::AcidBase,
            Self::Dilution(_) => ExperimentKind::Dilution,
            Self::GasLaw(_) => ExperimentKind::GasLaw,
        }
    }
}
