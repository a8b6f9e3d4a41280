use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no report text supplied")]
    EmptyInput,

    #[error("no reports found (looking for 'Provider:' lines)")]
    NoProviderAnchor,
}
