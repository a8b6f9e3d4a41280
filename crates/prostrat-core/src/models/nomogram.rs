use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::clinical::{ClinicalStage, PsaInput};
use crate::error::CoreError;

/// Clinical stage categories accepted by the nomogram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum NomogramStage {
    #[default]
    T1,
    T2a,
    T2b,
    T2c,
    T3,
}

impl NomogramStage {
    /// Collapse a clinical stage token: T2a/T2b/T2c by prefix, any T3 to `T3`,
    /// everything else (T1x, T4, `Auto`) to `T1`.
    pub fn from_clinical(stage: &ClinicalStage) -> Self {
        if stage.has_prefix("T2a") {
            NomogramStage::T2a
        } else if stage.has_prefix("T2b") {
            NomogramStage::T2b
        } else if stage.has_prefix("T2c") {
            NomogramStage::T2c
        } else if stage.has_prefix("T3") {
            NomogramStage::T3
        } else {
            NomogramStage::T1
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NomogramStage::T1 => "T1",
            NomogramStage::T2a => "T2a",
            NomogramStage::T2b => "T2b",
            NomogramStage::T2c => "T2c",
            NomogramStage::T3 => "T3",
        }
    }
}

impl FromStr for NomogramStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "T1" => Ok(NomogramStage::T1),
            "T2a" => Ok(NomogramStage::T2a),
            "T2b" => Ok(NomogramStage::T2b),
            "T2c" => Ok(NomogramStage::T2c),
            "T3" => Ok(NomogramStage::T3),
            other => Err(CoreError::InvalidStage(other.to_string())),
        }
    }
}

impl fmt::Display for NomogramStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved nomogram inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NomogramInputs {
    pub age: u32,
    pub psa: f64,
    /// 1–5.
    pub grade_group: u8,
    pub stage: NomogramStage,
    pub positive_cores: u32,
    pub negative_cores: u32,
}

impl NomogramInputs {
    pub const DEFAULT_AGE: u32 = 65;
    pub const DEFAULT_PSA: f64 = 5.0;
    /// Upper bound on PSA fed to the model. The spline's cubic terms
    /// cancel catastrophically far above the last knot.
    pub const MAX_PSA: f64 = PsaInput::MAX_VALUE;
    pub const DEFAULT_GRADE_GROUP: u8 = 1;
}

impl Default for NomogramInputs {
    fn default() -> Self {
        NomogramInputs {
            age: Self::DEFAULT_AGE,
            psa: Self::DEFAULT_PSA,
            grade_group: Self::DEFAULT_GRADE_GROUP,
            stage: NomogramStage::T1,
            positive_cores: 0,
            negative_cores: 0,
        }
    }
}

/// Loosely-typed nomogram inputs as typed into a form.
///
/// Every field is optional; [`RawNomogramInputs::resolve`] fills the gaps
/// with documented fallbacks instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawNomogramInputs {
    pub age: Option<f64>,
    pub psa: Option<f64>,
    pub grade_group: Option<i32>,
    pub stage: Option<NomogramStage>,
    pub positive_cores: Option<i32>,
    pub negative_cores: Option<i32>,
}

impl RawNomogramInputs {
    pub fn resolve(self) -> NomogramInputs {
        let age = self
            .age
            .filter(|a| a.is_finite() && *a >= 1.0)
            .map(|a| a.trunc().min(f64::from(u32::MAX)) as u32)
            .unwrap_or(NomogramInputs::DEFAULT_AGE);
        let psa = self
            .psa
            .filter(|p| p.is_finite() && *p > 0.0)
            .map(|p| p.min(NomogramInputs::MAX_PSA))
            .unwrap_or(NomogramInputs::DEFAULT_PSA);
        let grade_group = self
            .grade_group
            .filter(|g| (1..=5).contains(g))
            .map(|g| g as u8)
            .unwrap_or(NomogramInputs::DEFAULT_GRADE_GROUP);

        NomogramInputs {
            age,
            psa,
            grade_group,
            stage: self.stage.unwrap_or_default(),
            positive_cores: clamp_count(self.positive_cores),
            negative_cores: clamp_count(self.negative_cores),
        }
    }
}

fn clamp_count(value: Option<i32>) -> u32 {
    value.map(|v| v.max(0) as u32).unwrap_or(0)
}

/// Probabilities from the pre-treatment nomogram, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NomogramOutputs {
    pub organ_confined: f64,
    pub extracapsular_extension: f64,
    pub lymph_node_involvement: f64,
    pub seminal_vesicle_invasion: f64,
    /// Biochemical-recurrence-free survival at 5 years.
    pub bcr_free_5yr: f64,
    /// Biochemical-recurrence-free survival at 10 years.
    pub bcr_free_10yr: f64,
    /// Prostate-cancer-specific survival at 15 years.
    pub cancer_specific_15yr: f64,
}
