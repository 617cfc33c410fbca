use thiserror::Error;

/// Failure of a single call against the `/tarefa` resource.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Input rejected before any request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("task description must not be empty")]
    EmptyDescription,
}
