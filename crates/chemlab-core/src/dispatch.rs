//! Experiment dispatch.
//!
//! Routes a tagged request to the matching calculator. Dispatch is an
//! exhaustive match over the closed experiment set, so a kind without a
//! calculator fails to compile.

use crate::acid_base;
use crate::dilution;
use crate::error::Result;
use crate::experiment::{ExperimentRequest, ExperimentResult};
use crate::gas_law;

/// Run the calculator selected by the request tag.
pub fn run(request: &ExperimentRequest) -> Result<ExperimentResult> {
    tracing::debug!(experiment = request.kind().as_str(), "dispatching");

    match request {
        ExperimentRequest::AcidBase(params) => {
            acid_base::neutralize(params).map(ExperimentResult::AcidBase)
        }
        ExperimentRequest::Dilution(params) => {
            dilution::dilute(params).map(ExperimentResult::Dilution)
        }
        ExperimentRequest::GasLaw(params) => {
            gas_law::ideal_volume(params).map(ExperimentResult::GasLaw)
        }
    }
}

/// Parse a wire-level JSON body and run the selected calculator.
pub fn run_json(body: &serde_json::Value) -> Result<ExperimentResult> {
    let request = ExperimentRequest::from_json(body)?;
    run(&request)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ChemError;
    use crate::experiment::ExperimentKind;

    #[test]
    fn dispatches_each_kind() {
        let bodies = [
            json!({
                "experiment": "acid_base",
                "acid": "HCl",
                "base": "NaOH",
                "acidM": 1.0,
                "acidV": 100.0,
                "baseM": 1.0,
                "baseV": 100.0
            }),
            json!({ "experiment": "dilution", "c1": 2.0, "v1": 50.0, "v2": 100.0 }),
            json!({ "experiment": "gas_law", "P": 1.0, "n": 1.0, "T": 273.15 }),
        ];

        let kinds: Vec<ExperimentKind> = bodies
            .iter()
            .map(|body| run_json(body).unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            [
                ExperimentKind::AcidBase,
                ExperimentKind::Dilution,
                ExperimentKind::GasLaw
            ]
        );
    }

    #[test]
    fn result_mirrors_request_kind() {
        let body = json!({ "experiment": "gas_law", "P": 1.0, "n": 2.0, "T": 300.0 });
        let request = ExperimentRequest::from_json(&body).unwrap();
        let result = run(&request).unwrap();
        assert_eq!(result.kind(), request.kind());
    }

    #[test]
    fn unknown_experiment_surfaces() {
        let body = json!({ "experiment": "combustion" });
        let err = run_json(&body).unwrap_err();
        assert!(matches!(err, ChemError::UnknownExperiment(_)));
    }

    #[test]
    fn domain_failure_surfaces() {
        let body = json!({ "experiment": "gas_law", "P": 0.0, "n": 1.0, "T": 273.15 });
        let err = run_json(&body).unwrap_err();
        assert!(matches!(err, ChemError::Domain(_)));
    }
}
