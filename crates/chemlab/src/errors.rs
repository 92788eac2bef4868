//! Error handling and exit codes.

use chemlab_core::constants::exit_codes;
use chemlab_core::ChemError;

/// Map a run error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ChemError>() {
        Some(ChemError::InvalidParams(_)) => exit_codes::ERROR_INVALID_PARAMS,
        Some(ChemError::Domain(_)) => exit_codes::ERROR_DOMAIN,
        Some(ChemError::UnknownExperiment(_)) => exit_codes::ERROR_UNKNOWN_EXPERIMENT,
        None => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let domain: anyhow::Error = ChemError::Domain("zero pressure".into()).into();
        assert_eq!(exit_code(&domain), 5);

        let unknown: anyhow::Error = ChemError::UnknownExperiment("combustion".into()).into();
        assert_eq!(exit_code(&unknown), 6);

        let invalid: anyhow::Error = ChemError::InvalidParams("missing `c1`".into()).into();
        assert_eq!(exit_code(&invalid), 4);

        let generic = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&generic), 1);
    }
}
