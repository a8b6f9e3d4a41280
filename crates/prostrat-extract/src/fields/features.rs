use prostrat_core::models::specimen::AncillaryFeature;

const FEATURE_KEYWORDS: [(&str, AncillaryFeature); 4] = [
    ("perineural", AncillaryFeature::PerineuralInvasion),
    ("lymphovascular", AncillaryFeature::LymphovascularInvasion),
    ("cribriform", AncillaryFeature::Cribriform),
    ("intraductal", AncillaryFeature::IntraductalCarcinoma),
];

/// Features mentioned anywhere in the diagnosis text.
pub fn ancillary_features(text: &str) -> Vec<AncillaryFeature> {
    let lower = text.to_lowercase();
    FEATURE_KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, feature)| feature)
        .collect()
}
