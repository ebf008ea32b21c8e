use thiserror::Error;

/// Why a Content Store call produced nothing usable.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content store did not answer in time")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("content store answered {status} for {collection}")]
    Status { status: u16, collection: String },
    #[error("malformed content payload: {0}")]
    Decode(String),
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ContentError {
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ContentError::Timeout
        } else if err.is_decode() {
            ContentError::Decode(err.to_string())
        } else {
            ContentError::Network(err.to_string())
        }
    }

    /// Short label used as the `kind` metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentError::Timeout => "timeout",
            ContentError::Network(_) => "network",
            ContentError::Status { .. } => "status",
            ContentError::Decode(_) => "decode",
            ContentError::Config(_) => "config",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
}
