//! Pre-treatment nomogram: four logistic endpoints and a log-logistic
//! survival pair (BCR-free, then cancer-specific survival from BCR-free).

pub mod coefficients;
pub mod endpoints;
pub mod inputs;
pub mod spline;

use prostrat_core::models::clinical::TherapyFlags;
use prostrat_core::models::nomogram::{NomogramInputs, NomogramOutputs, NomogramStage};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use coefficients::{BCR_CORES, Coefficients, CssCoefficients, ECE, LN, OCD, PCD_CORES, SVI};
use spline::psa_spline;

pub const THERAPY_DISCLAIMER: &str =
    "Model disclaimers: Not valid if patient is on hormone or radiation therapy.";

impl Coefficients {
    /// Linear predictor `xb` for the given inputs.
    ///
    /// Terms are accumulated in a fixed order so results are reproducible
    /// bit-for-bit against the published reference outputs.
    pub fn linear_predictor(&self, inputs: &NomogramInputs) -> f64 {
        // `f64::min` also maps NaN to the cap.
        let psa = inputs.psa.min(NomogramInputs::MAX_PSA);
        let spline = psa_spline(psa);

        let mut xb = self.intercept;
        xb += self.age * f64::from(inputs.age);
        xb += self.psa * psa;
        xb += self.psa_spline1 * spline.sp1;
        xb += self.psa_spline2 * spline.sp2;

        xb += match inputs.grade_group {
            2 => self.ggg2,
            3 => self.ggg3,
            4 => self.ggg4,
            5 => self.ggg5,
            _ => 0.0,
        };

        xb += match inputs.stage {
            NomogramStage::T1 => 0.0,
            NomogramStage::T2a => self.stage_t2a,
            NomogramStage::T2b => self.stage_t2b,
            NomogramStage::T2c => self.stage_t2c,
            NomogramStage::T3 => self.stage_t3,
        };

        xb += self.pos_cores * f64::from(inputs.positive_cores);
        xb += self.neg_cores * f64::from(inputs.negative_cores);
        xb
    }
}

/// `exp(xb) / (1 + exp(xb))`, saturating to 1 when `exp` overflows.
pub fn logistic_probability(xb: f64) -> f64 {
    let e_xb = xb.exp();
    if e_xb.is_infinite() {
        return 1.0;
    }
    e_xb / (1.0 + e_xb)
}

/// Log-logistic survival `1 / (1 + (exp(-xb) * t)^(1/gamma))`.
pub fn survival_probability(xb: f64, gamma: f64, years: f64) -> f64 {
    let e_neg_xb = (-xb).exp();
    1.0 / (1.0 + (e_neg_xb * years).powf(1.0 / gamma))
}

impl CssCoefficients {
    /// Cancer-specific survival at `years` given 5-year BCR-free probability.
    pub fn survival(&self, bcr_free_5yr: f64, years: f64) -> f64 {
        let xb = self.intercept + self.bcr_coef * bcr_free_5yr;
        survival_probability(xb, self.gamma, years)
    }
}

/// Evaluate every endpoint for one set of inputs.
pub fn compute_nomogram(inputs: &NomogramInputs) -> NomogramOutputs {
    let bcr_xb = BCR_CORES.base.linear_predictor(inputs);
    let bcr_free_5yr = survival_probability(bcr_xb, BCR_CORES.gamma, 5.0);
    let bcr_free_10yr = survival_probability(bcr_xb, BCR_CORES.gamma, 10.0);

    let outputs = NomogramOutputs {
        organ_confined: logistic_probability(OCD.linear_predictor(inputs)),
        extracapsular_extension: logistic_probability(ECE.linear_predictor(inputs)),
        lymph_node_involvement: logistic_probability(LN.linear_predictor(inputs)),
        seminal_vesicle_invasion: logistic_probability(SVI.linear_predictor(inputs)),
        bcr_free_5yr,
        bcr_free_10yr,
        cancer_specific_15yr: PCD_CORES.survival(bcr_free_5yr, 15.0),
    };

    tracing::debug!(
        age = inputs.age,
        psa = inputs.psa,
        grade_group = inputs.grade_group,
        stage = %inputs.stage,
        "nomogram evaluated"
    );
    outputs
}

/// Nomogram outputs together with any caveat the caller must display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NomogramResult {
    pub inputs: NomogramInputs,
    pub outputs: NomogramOutputs,
    pub disclaimer: Option<String>,
}

/// Run the nomogram and attach the therapy disclaimer when it applies.
pub fn evaluate(inputs: NomogramInputs, therapy: TherapyFlags) -> NomogramResult {
    NomogramResult {
        outputs: compute_nomogram(&inputs),
        inputs,
        disclaimer: therapy.any().then(|| THERAPY_DISCLAIMER.to_string()),
    }
}
