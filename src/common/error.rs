use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid chat endpoint `{0}`")]
    InvalidEndpoint(String),

    #[error("chat request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed reply payload (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("reply payload has no `response` field (HTTP {0})")]
    MissingResponse(StatusCode),

    #[error("server reported an error: {0}")]
    Server(String),

    #[error("transport task is not running")]
    Disconnected,
}
