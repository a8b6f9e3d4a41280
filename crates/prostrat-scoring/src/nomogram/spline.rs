/// Knot positions of the restricted cubic spline on PSA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knots {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
}

pub const PSA_KNOTS: Knots = Knots {
    k1: 0.2,
    k2: 4.8,
    k3: 7.33,
    k4: 307.0,
};

/// Non-linear spline terms for one PSA value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineTerms {
    pub sp1: f64,
    pub sp2: f64,
}

fn rcs_term(x: f64, knot: f64) -> f64 {
    (x - knot).max(0.0).powf(3.0)
}

/// Evaluate both spline basis terms at `psa`.
pub fn psa_spline(psa: f64) -> SplineTerms {
    let Knots { k1, k2, k3, k4 } = PSA_KNOTS;
    let sp1 = rcs_term(psa, k1) - rcs_term(psa, k3) * (k4 - k1) / (k4 - k3)
        + rcs_term(psa, k4) * (k3 - k1) / (k4 - k3);
    let sp2 = rcs_term(psa, k2) - rcs_term(psa, k3) * (k4 - k2) / (k4 - k3)
        + rcs_term(psa, k4) * (k3 - k2) / (k4 - k3);
    SplineTerms { sp1, sp2 }
}
