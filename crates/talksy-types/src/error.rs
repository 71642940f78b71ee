use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TalksyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for TalksyError {
    fn from(e: serde_json::Error) -> Self {
        TalksyError::Serialization(e.to_string())
    }
}
