use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("completed session count must be at least 1, got {0}")]
    InvalidSessionCount(u32),

    #[error("calendar arithmetic error: {0}")]
    Calendar(#[from] jiff::Error),
}
