//! Acid-base neutralization calculator.
//!
//! Mixes a strong monoprotic acid with a strong base and reports the pH
//! of the combined solution. Whichever reagent is in excess sets the
//! hydrogen (or hydroxide) concentration over the total volume.

use serde::{Deserialize, Serialize};

use crate::constants::{ML_PER_L, NEUTRAL_PH, PH_POH_SUM};
use crate::error::{ChemError, Result};

/// Classification for an acid excess.
pub const ACIDIC: &str = "Acidic solution (acid in excess).";

/// Classification for a base excess.
pub const BASIC: &str = "Basic solution (base in excess).";

/// Classification for exact neutralization.
pub const NEUTRAL: &str = "Neutral solution (perfectly neutralized).";

/// Parameters for an acid-base neutralization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcidBaseParams {
    /// Acid label (display only).
    pub acid: String,
    /// Base label (display only).
    pub base: String,
    /// Acid molarity in mol/L.
    #[serde(rename = "acidM")]
    pub acid_molarity: f64,
    /// Acid volume in mL.
    #[serde(rename = "acidV")]
    pub acid_volume_ml: f64,
    /// Base molarity in mol/L.
    #[serde(rename = "baseM")]
    pub base_molarity: f64,
    /// Base volume in mL.
    #[serde(rename = "baseV")]
    pub base_volume_ml: f64,
}

/// Computed outcome of an acid-base neutralization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcidBaseOutcome {
    /// Acid label echoed from the request.
    pub acid: String,
    /// Base label echoed from the request.
    pub base: String,
    /// pH of the combined solution.
    #[serde(rename = "pH")]
    pub ph: f64,
    /// Human-readable classification of the solution.
    pub result: String,
}

/// Mix the acid and base and compute the resulting pH.
pub fn neutralize(params: &AcidBaseParams) -> Result<AcidBaseOutcome> {
    // moles = M * V(L)
    let moles_acid = params.acid_molarity * (params.acid_volume_ml / ML_PER_L);
    let moles_base = params.base_molarity * (params.base_volume_ml / ML_PER_L);

    let total_volume_l = (params.acid_volume_ml + params.base_volume_ml) / ML_PER_L;

    let (ph, classification) = if moles_acid > moles_base {
        let h_conc = excess_concentration(moles_acid - moles_base, total_volume_l)?;
        (-h_conc.log10(), ACIDIC)
    } else if moles_base > moles_acid {
        let oh_conc = excess_concentration(moles_base - moles_acid, total_volume_l)?;
        let p_oh = -oh_conc.log10();
        (PH_POH_SUM - p_oh, BASIC)
    } else {
        (NEUTRAL_PH, NEUTRAL)
    };

    Ok(AcidBaseOutcome {
        acid: params.acid.clone(),
        base: params.base.clone(),
        ph,
        result: classification.to_string(),
    })
}

/// Concentration of the excess reagent over the combined volume.
///
/// The excess is positive by construction of the caller's branch, so a
/// non-positive concentration can only come from a non-positive total
/// volume; both are reported as domain failures rather than letting the
/// logarithm produce an infinity.
fn excess_concentration(excess_moles: f64, total_volume_l: f64) -> Result<f64> {
    if total_volume_l <= 0.0 {
        return Err(ChemError::domain("total volume must be positive"));
    }
    let concentration = excess_moles / total_volume_l;
    if !(concentration > 0.0 && concentration.is_finite()) {
        return Err(ChemError::domain("excess concentration must be positive"));
    }
    Ok(concentration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(acid_m: f64, acid_v: f64, base_m: f64, base_v: f64) -> AcidBaseParams {
        AcidBaseParams {
            acid: "HCl".into(),
            base: "NaOH".into(),
            acid_molarity: acid_m,
            acid_volume_ml: acid_v,
            base_molarity: base_m,
            base_volume_ml: base_v,
        }
    }

    #[test]
    fn equal_moles_neutral() {
        let outcome = neutralize(&params(1.0, 100.0, 1.0, 100.0)).unwrap();
        assert!((outcome.ph - 7.0).abs() < f64::EPSILON);
        assert_eq!(outcome.result, NEUTRAL);
        assert_eq!(outcome.acid, "HCl");
        assert_eq!(outcome.base, "NaOH");
    }

    #[test]
    fn acid_excess() {
        // moles_acid = 0.02, moles_base = 0.005, excess over 0.3 L -> [H+] = 0.05
        let outcome = neutralize(&params(0.1, 200.0, 0.05, 100.0)).unwrap();
        assert!((outcome.ph - 1.301_029_995_663_981_3).abs() < 1e-12);
        assert_eq!(outcome.result, ACIDIC);
    }

    #[test]
    fn base_excess() {
        // Mirror of the acid case: [OH-] = 0.05 -> pOH ~= 1.301 -> pH ~= 12.699
        let outcome = neutralize(&params(0.05, 100.0, 0.1, 200.0)).unwrap();
        assert!((outcome.ph - 12.698_970_004_336_019).abs() < 1e-12);
        assert_eq!(outcome.result, BASIC);
    }

    #[test]
    fn neutral_is_scale_invariant() {
        for k in [0.001, 1.0, 50.0, 10_000.0] {
            let outcome = neutralize(&params(2.5 * k, 40.0, 2.5 * k, 40.0)).unwrap();
            assert!((outcome.ph - 7.0).abs() < f64::EPSILON, "k={k}");
            assert_eq!(outcome.result, NEUTRAL);
        }
    }

    #[test]
    fn zero_total_volume_is_domain_error() {
        let result = neutralize(&params(1.0, 0.0, 0.5, 0.0));
        assert!(matches!(result, Err(ChemError::Domain(_))));
    }

    #[test]
    fn zero_volumes_equal_molarity_neutral() {
        // Both moles are exactly zero, so the equality branch applies and
        // the total volume is never used.
        let outcome = neutralize(&params(1.0, 0.0, 1.0, 0.0)).unwrap();
        assert!((outcome.ph - 7.0).abs() < f64::EPSILON);
        assert_eq!(outcome.result, NEUTRAL);
    }

    #[test]
    fn wire_field_names() {
        let json = serde_json::json!({
            "acid": "HCl",
            "base": "NaOH",
            "acidM": 1.0,
            "acidV": 100.0,
            "baseM": 1.0,
            "baseV": 100.0
        });
        let parsed: AcidBaseParams = serde_json::from_value(json).unwrap();
        assert!((parsed.acid_molarity - 1.0).abs() < f64::EPSILON);

        let outcome = neutralize(&parsed).unwrap();
        let value = serde_json::to_value(&outcome).unwrap();
        assert!(value.get("pH").is_some());
        assert!(value.get("result").is_some());
    }
}
