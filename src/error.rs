use thiserror::Error;

/// Errors raised by network construction, propagation, training and evolution.
///
/// Every check runs before any state is touched, so a failed call leaves the
/// network exactly as it was.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid crossover: {0}")]
    InvalidCrossover(String),

    #[error("population is empty")]
    EmptyPopulation,

    #[error("generate returned {actual} networks, expected {expected}")]
    PopulationSize { expected: usize, actual: usize },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
