use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Per-request failures of the sentence relay.
///
/// Only [`RelayError::InvalidInput`] ever reaches a caller; every upstream
/// variant is converted into a synthesized evaluation by the relay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Sentence is required")]
    InvalidInput,

    #[error("Webhook unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Webhook returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Webhook reply is not valid JSON: {0}")]
    MalformedReply(String),

    #[error("Webhook reply has no usable shape: {0}")]
    UpstreamShapeMismatch(String),
}

impl RelayError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(msg.into())
    }

    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::UpstreamShapeMismatch(msg.into())
    }

    /// Whether the error is the caller's fault rather than the webhook's.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }
}
