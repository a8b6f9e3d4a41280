use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// PSA range as picked from a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PsaBucket {
    #[serde(rename = "<10")]
    Below10,
    #[serde(rename = "10-20")]
    From10To20,
    #[serde(rename = ">20")]
    Above20,
}

impl PsaBucket {
    pub fn token(self) -> &'static str {
        match self {
            PsaBucket::Below10 => "<10",
            PsaBucket::From10To20 => "10-20",
            PsaBucket::Above20 => ">20",
        }
    }

    /// Representative numeric value used for classification and the nomogram.
    pub fn representative(self) -> f64 {
        match self {
            PsaBucket::Below10 => 5.0,
            PsaBucket::From10To20 => 15.0,
            PsaBucket::Above20 => 25.0,
        }
    }
}

/// PSA as supplied by the caller: a bucket token or a manual value in ng/mL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum PsaInput {
    Bucket(PsaBucket),
    Value(f64),
}

impl PsaInput {
    /// Manual values that are not finite and positive resolve to this.
    pub const MANUAL_FALLBACK: f64 = 10.0;
    /// Manual values above this are capped.
    pub const MAX_VALUE: f64 = 10_000.0;

    pub fn numeric(self) -> f64 {
        match self {
            PsaInput::Bucket(bucket) => bucket.representative(),
            PsaInput::Value(v) if v.is_finite() && v > 0.0 => v.min(Self::MAX_VALUE),
            PsaInput::Value(_) => Self::MANUAL_FALLBACK,
        }
    }
}

impl Default for PsaInput {
    fn default() -> Self {
        PsaInput::Bucket(PsaBucket::Below10)
    }
}

impl FromStr for PsaInput {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "<10" => Ok(PsaInput::Bucket(PsaBucket::Below10)),
            "10-20" => Ok(PsaInput::Bucket(PsaBucket::From10To20)),
            ">20" => Ok(PsaInput::Bucket(PsaBucket::Above20)),
            _ => token
                .parse::<f64>()
                .map(PsaInput::Value)
                .map_err(|_| CoreError::InvalidPsa(s.to_string())),
        }
    }
}

impl fmt::Display for PsaInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PsaInput::Bucket(bucket) => f.write_str(bucket.token()),
            PsaInput::Value(v) => write!(f, "{v}"),
        }
    }
}

/// Clinical T-stage token (`T1c`, `T2a`, ..., `T4`, or `Auto`).
///
/// Stored as given; the predicates below match case-insensitively on prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ClinicalStage(String);

impl ClinicalStage {
    pub const AUTO: &'static str = "Auto";

    pub fn new(token: impl Into<String>) -> Self {
        ClinicalStage(token.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_auto(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::AUTO)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.0
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    /// Integer after the leading `T`; 1 when absent or unparseable.
    pub fn numeral(&self) -> u8 {
        let Some(rest) = self.0.get(1..).filter(|_| self.starts_with("T")) else {
            return 1;
        };
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(1)
    }

    /// T3a, T3b or T4.
    pub fn is_locally_advanced(&self) -> bool {
        self.starts_with("T3a") || self.starts_with("T3b") || self.starts_with("T4")
    }

    pub fn is_t1c(&self) -> bool {
        self.0.eq_ignore_ascii_case("T1c")
    }

    /// T2b or T2c, an intermediate-risk factor.
    pub fn is_t2b_or_t2c(&self) -> bool {
        self.starts_with("T2b") || self.starts_with("T2c")
    }

    pub(crate) fn has_prefix(&self, prefix: &str) -> bool {
        self.starts_with(prefix)
    }
}

impl Default for ClinicalStage {
    fn default() -> Self {
        ClinicalStage::new("T1c")
    }
}

impl FromStr for ClinicalStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stage = ClinicalStage::new(s);
        if stage.is_auto() || stage.starts_with("T") {
            Ok(stage)
        } else {
            Err(CoreError::InvalidStage(s.to_string()))
        }
    }
}

impl fmt::Display for ClinicalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hormone / radiation therapy flags. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyFlags {
    pub hormone: bool,
    pub radiation: bool,
}

impl TherapyFlags {
    pub fn any(self) -> bool {
        self.hormone || self.radiation
    }
}

/// Caller-supplied inputs that are not derived from report text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalInputs {
    pub psa: PsaInput,
    pub stage: ClinicalStage,
    /// Manual total-core count replacing the aggregated denominator.
    #[serde(default)]
    pub total_cores_override: Option<u32>,
    #[serde(default)]
    pub therapy: TherapyFlags,
}
