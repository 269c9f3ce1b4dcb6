use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrandError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Parameter mismatch: expected {expected} point parameters, got {actual}")]
    ParameterMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, StrandError>;
