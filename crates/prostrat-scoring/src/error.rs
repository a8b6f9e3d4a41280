use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown nomogram endpoint: {0}")]
    UnknownEndpoint(String),
}
