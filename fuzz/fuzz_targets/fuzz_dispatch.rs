#![no_main]

use libfuzzer_sys::fuzz_target;

use chemlab_core::{dispatch, ExperimentResult};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(body) = serde_json::from_str::<serde_json::Value>(text) else {
        return;
    };

    // Dispatch must never panic; successful results must keep their
    // display invariants.
    if let Ok(result) = dispatch::run_json(&body) {
        match result {
            ExperimentResult::Dilution(outcome) => {
                assert!(
                    outcome.fill_percent >= 10.0 && outcome.fill_percent <= 100.0,
                    "fill_percent out of range: {}",
                    outcome.fill_percent
                );
            }
            ExperimentResult::AcidBase(_) | ExperimentResult::GasLaw(_) => {}
        }
    }
});
