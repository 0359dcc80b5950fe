#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{detail} (HTTP {status})")]
    Status { status: u16, detail: String },

    #[error("unexpected response for {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Whether retrying the same call may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Http(err) => err.is_timeout() || err.is_connect(),
            ClientError::Status { status, .. } => *status >= 500 || *status == 429,
            ClientError::InvalidBaseUrl { .. } | ClientError::Decode { .. } => false,
        }
    }
}
