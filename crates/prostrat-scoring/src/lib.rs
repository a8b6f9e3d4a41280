//! prostrat-scoring
//!
//! NCCN risk classification and the pre-treatment nomogram. Pure functions
//! over `prostrat-core` types; no text parsing or I/O.

pub mod error;
pub mod nomogram;
pub mod risk;

use prostrat_core::models::nomogram::NomogramInputs;

use error::ScoringError;

/// Kind of statistical model behind an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Probability of a pathologic finding at surgery.
    Logistic,
    /// Survival probability at a fixed horizon.
    Survival,
}

/// Trait implemented by each nomogram endpoint.
pub trait Endpoint: Send + Sync {
    /// Unique identifier (e.g., "ocd", "bcr_5yr").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Organ Confined Disease").
    fn name(&self) -> &str;

    fn kind(&self) -> EndpointKind;

    /// Probability in `[0, 1]` for the given inputs.
    fn probability(&self, inputs: &NomogramInputs) -> f64;

    /// Format the probability as a one-line percentage for display.
    fn describe(&self, inputs: &NomogramInputs) -> String {
        format!("{}: {:.1}%", self.name(), self.probability(inputs) * 100.0)
    }
}

/// Return all endpoints in display order.
pub fn all_endpoints() -> Vec<Box<dyn Endpoint>> {
    use nomogram::coefficients::{BCR_CORES, ECE, LN, OCD, SVI};
    use nomogram::endpoints::{CancerSpecificSurvival, LogisticEndpoint, SurvivalEndpoint};

    vec![
        Box::new(CancerSpecificSurvival::new("css_15yr", "PC-Specific Survival @ 15 years", 15.0)),
        Box::new(SurvivalEndpoint::new(
            "bcr_10yr",
            "Progression-Free Survival @ 10 years",
            &BCR_CORES,
            10.0,
        )),
        Box::new(SurvivalEndpoint::new(
            "bcr_5yr",
            "Progression-Free Survival @ 5 years",
            &BCR_CORES,
            5.0,
        )),
        Box::new(LogisticEndpoint::new("ocd", "Organ Confined Disease Prob", &OCD)),
        Box::new(LogisticEndpoint::new("ece", "Extracapsular Extension Prob", &ECE)),
        Box::new(LogisticEndpoint::new("ln", "Lymph Node Involvement Prob", &LN)),
        Box::new(LogisticEndpoint::new("svi", "Seminal Vesicle Invasion Prob", &SVI)),
    ]
}

/// Look up an endpoint by ID.
pub fn get_endpoint(id: &str) -> Result<Box<dyn Endpoint>, ScoringError> {
    all_endpoints()
        .into_iter()
        .find(|e| e.id() == id)
        .ok_or_else(|| ScoringError::UnknownEndpoint(id.to_string()))
}
