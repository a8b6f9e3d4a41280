use prostrat_core::models::nomogram::NomogramInputs;

use super::coefficients::{BCR_CORES, Coefficients, PCD_CORES, SurvivalCoefficients};
use super::{logistic_probability, survival_probability};
use crate::{Endpoint, EndpointKind};

/// A logistic-regression endpoint (OCD, ECE, LN, SVI).
pub struct LogisticEndpoint {
    id: &'static str,
    name: &'static str,
    coefficients: &'static Coefficients,
}

impl LogisticEndpoint {
    pub fn new(id: &'static str, name: &'static str, coefficients: &'static Coefficients) -> Self {
        LogisticEndpoint {
            id,
            name,
            coefficients,
        }
    }
}

impl Endpoint for LogisticEndpoint {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> EndpointKind {
        EndpointKind::Logistic
    }

    fn probability(&self, inputs: &NomogramInputs) -> f64 {
        logistic_probability(self.coefficients.linear_predictor(inputs))
    }
}

/// A survival endpoint evaluated at a fixed horizon.
pub struct SurvivalEndpoint {
    id: &'static str,
    name: &'static str,
    model: &'static SurvivalCoefficients,
    years: f64,
}

impl SurvivalEndpoint {
    pub fn new(
        id: &'static str,
        name: &'static str,
        model: &'static SurvivalCoefficients,
        years: f64,
    ) -> Self {
        SurvivalEndpoint {
            id,
            name,
            model,
            years,
        }
    }
}

impl Endpoint for SurvivalEndpoint {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> EndpointKind {
        EndpointKind::Survival
    }

    fn probability(&self, inputs: &NomogramInputs) -> f64 {
        let xb = self.model.base.linear_predictor(inputs);
        survival_probability(xb, self.model.gamma, self.years)
    }
}

/// Cancer-specific survival. Its only regressor is the 5-year BCR-free
/// probability, so the clinical inputs reach it through the BCR model.
pub struct CancerSpecificSurvival {
    id: &'static str,
    name: &'static str,
    years: f64,
}

impl CancerSpecificSurvival {
    pub fn new(id: &'static str, name: &'static str, years: f64) -> Self {
        CancerSpecificSurvival { id, name, years }
    }
}

impl Endpoint for CancerSpecificSurvival {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> EndpointKind {
        EndpointKind::Survival
    }

    fn probability(&self, inputs: &NomogramInputs) -> f64 {
        let bcr_xb = BCR_CORES.base.linear_predictor(inputs);
        let bcr_free_5yr = survival_probability(bcr_xb, BCR_CORES.gamma, 5.0);
        PCD_CORES.survival(bcr_free_5yr, self.years)
    }
}
