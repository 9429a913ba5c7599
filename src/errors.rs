use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdsError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type SdsResult<T> = Result<T, SdsError>;

/// Helper for mapping a rejected input into `InvalidValue`
pub fn invalid_value<E: ToString>(err: E) -> SdsError {
    SdsError::InvalidValue(err.to_string())
}

impl From<serde_json::Error> for SdsError {
    fn from(err: serde_json::Error) -> Self {
        SdsError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for SdsError {
    fn from(err: validator::ValidationErrors) -> Self {
        SdsError::Config(err.to_string())
    }
}
