use thiserror::Error;

/// Everything that can go wrong between building a request and decoding its
/// response. No variant is retried; the caller gets the first failure.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build request: {0}")]
    Build(String),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Carries the status line, e.g. `503 Service Unavailable`
    #[error("Bad status: {0}")]
    BadStatus(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
