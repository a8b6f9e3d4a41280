use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::grade::GradeGroup;

/// Positive cores out of cores sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoreFraction {
    pub positive: u32,
    pub total: u32,
}

impl CoreFraction {
    /// Build a fraction, rejecting a zero denominator or `positive > total`.
    pub fn new(positive: u32, total: u32) -> Option<Self> {
        if total == 0 || positive > total {
            return None;
        }
        Some(CoreFraction { positive, total })
    }

    pub fn negative(self) -> u32 {
        self.total.saturating_sub(self.positive)
    }

    /// `positive / total`, or 0 for an empty denominator.
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.positive) / f64::from(self.total)
    }

    /// Percentage rounded half away from zero.
    pub fn percent(self) -> u32 {
        (self.ratio() * 100.0).round() as u32
    }
}

impl fmt::Display for CoreFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}({}%)", self.positive, self.total, self.percent())
    }
}

/// Short diagnosis category for a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosisCategory {
    AcinarAdenocarcinoma,
    DuctalAdenocarcinoma,
    TransitionalCellCarcinoma,
    SquamousCellCarcinoma,
    SmallCellCarcinoma,
    LargeCellCarcinoma,
    Adenocarcinoma,
    FocalAsap,
    FocalHgpin,
    Asap,
    Hgpin,
    Prostatitis,
    Inflammation,
    Benign,
    Bph,
    Unknown,
}

impl DiagnosisCategory {
    pub fn label(self) -> &'static str {
        match self {
            DiagnosisCategory::AcinarAdenocarcinoma => "Acinar AdenoCA",
            DiagnosisCategory::DuctalAdenocarcinoma => "Ductal AdenoCA",
            DiagnosisCategory::TransitionalCellCarcinoma => "Transitional Cell CA",
            DiagnosisCategory::SquamousCellCarcinoma => "Squamous Cell CA",
            DiagnosisCategory::SmallCellCarcinoma => "Small Cell CA",
            DiagnosisCategory::LargeCellCarcinoma => "Large Cell CA",
            DiagnosisCategory::Adenocarcinoma => "AdenoCA",
            DiagnosisCategory::FocalAsap => "Focal ASAP",
            DiagnosisCategory::FocalHgpin => "Focal HGPIN",
            DiagnosisCategory::Asap => "ASAP",
            DiagnosisCategory::Hgpin => "HGPIN",
            DiagnosisCategory::Prostatitis => "Prostatitis",
            DiagnosisCategory::Inflammation => "Inflammation",
            DiagnosisCategory::Benign => "Benign",
            DiagnosisCategory::Bph => "BPH",
            DiagnosisCategory::Unknown => "N/A",
        }
    }

    /// Adenocarcinoma variants count toward the encounter core total.
    pub fn is_adenocarcinoma(self) -> bool {
        matches!(
            self,
            DiagnosisCategory::AcinarAdenocarcinoma
                | DiagnosisCategory::DuctalAdenocarcinoma
                | DiagnosisCategory::Adenocarcinoma
        )
    }
}

impl fmt::Display for DiagnosisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AncillaryFeature {
    PerineuralInvasion,
    LymphovascularInvasion,
    Cribriform,
    IntraductalCarcinoma,
}

impl AncillaryFeature {
    pub fn label(self) -> &'static str {
        match self {
            AncillaryFeature::PerineuralInvasion => "PNI",
            AncillaryFeature::LymphovascularInvasion => "LVI",
            AncillaryFeature::Cribriform => "Cribriform",
            AncillaryFeature::IntraductalCarcinoma => "Intraductal",
        }
    }
}

/// One "tumor measures V mm in W mm" observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoreLength {
    pub tumor_mm: f64,
    pub total_mm: f64,
}

/// A single labeled specimen from the final diagnosis block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Specimen {
    /// Uppercase letter from the specimen header (`A`, `B`, ...).
    pub label: char,
    pub location: String,
    pub is_target_lesion: bool,
    /// Anatomic text left over after removing a `target N` token.
    pub leftover_site: String,
    pub diagnosis: DiagnosisCategory,
    pub grade_group: GradeGroup,
    pub cores_positive: Option<CoreFraction>,
    pub max_involved_length_mm: Option<f64>,
    /// Present features, in declaration order, without duplicates.
    pub ancillary_features: Vec<AncillaryFeature>,
    pub pattern_distribution: Option<String>,
    pub core_lengths: Vec<CoreLength>,
}

impl Specimen {
    /// One-line summary used for comparison tables.
    ///
    /// Absent parts are omitted; a specimen with nothing to report reads `N/A`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        let mut head = String::new();
        if self.is_target_lesion && !self.leftover_site.is_empty() {
            head.push_str(&self.leftover_site);
            head.push_str(" - ");
        }
        if self.diagnosis != DiagnosisCategory::Unknown {
            head.push_str(self.diagnosis.label());
            if let Some(note) = &self.pattern_distribution {
                head.push_str(&format!("({note})"));
            }
        }
        if !head.is_empty() {
            parts.push(head);
        }

        if self.grade_group.is_graded() {
            parts.push(format!("GG={}", self.grade_group));
        }
        if let Some(cores) = self.cores_positive {
            parts.push(format!("Cores={cores}"));
        }
        if let Some(length) = self.max_involved_length_mm {
            parts.push(format!("Max Core w Cancer={length}mm"));
        }
        if !self.ancillary_features.is_empty() {
            let labels: Vec<&str> = self.ancillary_features.iter().map(|f| f.label()).collect();
            parts.push(labels.join(", "));
        }

        if parts.is_empty() {
            return "N/A".to_string();
        }
        parts.join(", ")
    }
}
