use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),

    #[error("stored results under '{key}' are malformed: {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
