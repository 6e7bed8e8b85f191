use thiserror::Error;

/// Errors raised while talking to the restaurant discovery API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: DNS, refused connection, timeout, broken body stream.
    #[error("fail to reach restaurant API")]
    Network(#[from] reqwest::Error),

    /// The API answered, but not with a 2xx status. The body is never decoded.
    #[error("restaurant API request failed with status {status}: {url}")]
    Status { status: u16, url: String },

    /// Body is not the expected JSON shape.
    #[error("fail to decode restaurant API response")]
    Decode(#[from] serde_json::Error),

    #[error("invalid restaurant API base url")]
    InvalidUrl(#[from] url::ParseError),

    /// Empty or made of dots only, cannot be sent as a path segment.
    #[error("invalid postal code {0:?}")]
    InvalidPostalCode(String),
}

impl ClientError {
    /// Transport failures and non-2xx answers both count as network errors.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
