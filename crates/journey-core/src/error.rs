//! Error types shared by the journey tools.

use thiserror::Error;

/// Errors raised while reading or writing journey data.
#[derive(Debug, Error)]
pub enum JourneyError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(String),

    /// A year/month/day combination that does not exist.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A day's count would exceed the counter range.
    #[error("Count overflow on {0}")]
    CountOverflow(String),

    /// Difficulty label outside Easy/Medium/Hard.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Configuration could not be resolved.
    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for JourneyError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e.to_string())
    }
}

/// Result type for journey operations.
pub type JourneyResult<T> = Result<T, JourneyError>;
