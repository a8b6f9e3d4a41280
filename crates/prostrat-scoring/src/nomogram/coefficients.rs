//! Published coefficient tables for the pre-treatment nomogram.
//!
//! Values are reproduced verbatim; do not round or re-derive them.

/// Regression coefficients shared by the logistic and survival models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub intercept: f64,
    pub age: f64,
    pub psa: f64,
    pub psa_spline1: f64,
    pub psa_spline2: f64,
    pub ggg2: f64,
    pub ggg3: f64,
    pub ggg4: f64,
    pub ggg5: f64,
    pub stage_t2a: f64,
    pub stage_t2b: f64,
    pub stage_t2c: f64,
    pub stage_t3: f64,
    pub pos_cores: f64,
    pub neg_cores: f64,
}

/// A survival model: clinical coefficients plus the log-logistic shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalCoefficients {
    pub base: Coefficients,
    pub gamma: f64,
}

/// Cancer-specific survival, driven only by 5-year BCR-free probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssCoefficients {
    pub intercept: f64,
    pub bcr_coef: f64,
    pub gamma: f64,
}

/// Organ-confined disease.
pub const OCD: Coefficients = Coefficients {
    intercept: 4.04759847,
    age: -0.02874416,
    psa: -0.25142694,
    psa_spline1: 0.00170562,
    psa_spline2: -0.0047362,
    ggg2: -0.66507525,
    ggg3: -1.24440478,
    ggg4: -1.24556939,
    ggg5: -2.29909232,
    stage_t2a: -0.24874093,
    stage_t2b: -0.77330003,
    stage_t2c: -0.57018419,
    stage_t3: -1.47216113,
    pos_cores: -0.08590313,
    neg_cores: 0.06308424,
};

/// Extracapsular extension.
pub const ECE: Coefficients = Coefficients {
    intercept: -4.12316412,
    age: 0.03002483,
    psa: 0.24631397,
    psa_spline1: -0.00173719,
    psa_spline2: 0.00483196,
    ggg2: 0.63224646,
    ggg3: 1.12707867,
    ggg4: 1.16261692,
    ggg5: 2.14168233,
    stage_t2a: 0.23208997,
    stage_t2b: 0.78324104,
    stage_t2c: 0.61674852,
    stage_t3: 1.4802089,
    pos_cores: 0.08822019,
    neg_cores: -0.06245231,
};

/// Lymph-node involvement.
pub const LN: Coefficients = Coefficients {
    intercept: -5.55716924,
    age: 0.01383913,
    psa: 0.19989322,
    psa_spline1: -0.00137288,
    psa_spline2: 0.00379338,
    ggg2: 0.96607022,
    ggg3: 1.98186216,
    ggg4: 2.13543564,
    ggg5: 2.74999239,
    stage_t2a: 0.20425873,
    stage_t2b: 0.56977406,
    stage_t2c: 0.5132864,
    stage_t3: 0.92021757,
    pos_cores: 0.06832617,
    neg_cores: -0.08827788,
};

/// Seminal-vesicle invasion.
pub const SVI: Coefficients = Coefficients {
    intercept: -6.34416925,
    age: 0.02294635,
    psa: 0.27708214,
    psa_spline1: -0.0022032,
    psa_spline2: 0.00615729,
    ggg2: 1.01060597,
    ggg3: 1.85561279,
    ggg4: 1.99375384,
    ggg5: 2.95409228,
    stage_t2a: 0.13413385,
    stage_t2b: 0.40933437,
    stage_t2c: 0.76647585,
    stage_t3: 0.80547871,
    pos_cores: 0.07534199,
    neg_cores: -0.12050282,
};

/// Biochemical-recurrence-free survival (core-count variant).
pub const BCR_CORES: SurvivalCoefficients = SurvivalCoefficients {
    base: Coefficients {
        intercept: 6.59468768,
        age: -0.00527992,
        psa: -0.4707596,
        psa_spline1: 0.00407629,
        psa_spline2: -0.01141213,
        ggg2: -1.0072232,
        ggg3: -2.02462439,
        ggg4: -2.49980646,
        ggg5: -2.80520499,
        stage_t2a: -0.3285729,
        stage_t2b: -0.65148102,
        stage_t2c: -0.61816331,
        stage_t3: -0.93665289,
        pos_cores: -0.05378144,
        neg_cores: 0.03456631,
    },
    gamma: 1.06458144,
};

/// Prostate-cancer-specific survival (core-count variant).
pub const PCD_CORES: CssCoefficients = CssCoefficients {
    intercept: 2.49813214,
    bcr_coef: 2.24491531,
    gamma: 0.40929215,
};
