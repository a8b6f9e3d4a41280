use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid PSA value: {0}")]
    InvalidPsa(String),

    #[error("invalid clinical stage: {0}")]
    InvalidStage(String),

    #[error("grade group must be between 0 and 5, got {0}")]
    InvalidGradeGroup(u8),
}
