//! Application entry point and dispatch.

use anyhow::Result;

use chemlab_core::acid_base::AcidBaseParams;
use chemlab_core::dilution::DilutionParams;
use chemlab_core::dispatch;
use chemlab_core::experiment::{ExperimentRequest, ExperimentResult};
use chemlab_core::gas_law::GasLawParams;

use crate::config::{AppConfig, Experiment};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let request = build_request(&config.experiment);
    let result = dispatch::run(&request)?;
    present(&result, config.quiet)?;
    Ok(())
}

/// Map the parsed subcommand onto a typed experiment request.
fn build_request(experiment: &Experiment) -> ExperimentRequest {
    match experiment {
        Experiment::AcidBase {
            acid,
            base,
            acid_molarity,
            acid_volume,
            base_molarity,
            base_volume,
        } => ExperimentRequest::AcidBase(AcidBaseParams {
            acid: acid.clone(),
            base: base.clone(),
            acid_molarity: *acid_molarity,
            acid_volume_ml: *acid_volume,
            base_molarity: *base_molarity,
            base_volume_ml: *base_volume,
        }),
        Experiment::Dilution { solute, c1, v1, v2 } => {
            ExperimentRequest::Dilution(DilutionParams {
                solute: solute.clone(),
                c1: *c1,
                v1: *v1,
                v2: *v2,
            })
        }
        Experiment::GasLaw {
            pressure,
            moles,
            temperature,
        } => ExperimentRequest::GasLaw(GasLawParams {
            pressure_atm: *pressure,
            moles: *moles,
            temperature_k: *temperature,
        }),
    }
}

fn present(result: &ExperimentResult, quiet: bool) -> Result<()> {
    if quiet {
        println!("{}", primary_value(result));
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// The single headline number for quiet mode.
fn primary_value(result: &ExperimentResult) -> f64 {
    match result {
        ExperimentResult::AcidBase(outcome) => outcome.ph,
        ExperimentResult::Dilution(outcome) => outcome.c2,
        ExperimentResult::GasLaw(outcome) => outcome.volume_l,
    }
}
