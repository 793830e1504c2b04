use reqwest::Method;
use thiserror::Error;
use tracer_common::config::ConfigError;
use tracer_common::types::TracerId;

use crate::transport::BoxError;

/// The stage of a call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Encode,
    Transport,
    Decode,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to read `{key}` from configuration: {source}")]
    Config {
        key: &'static str,
        #[source]
        source: ConfigError,
    },

    #[error("invalid server address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to encode {what} as JSON: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: BoxError,
    },

    /// The server answered, but not with a 2xx status.
    #[error("{method} {url} returned {status}: {body}")]
    Server {
        method: Method,
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to decode {what} from {url}: {source}")]
    Decode {
        what: &'static str,
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Config { .. } | ClientError::InvalidAddress { .. } => ErrorKind::Config,
            ClientError::Encode { .. } => ErrorKind::Encode,
            ClientError::Transport { .. } | ClientError::Server { .. } => ErrorKind::Transport,
            ClientError::Decode { .. } => ErrorKind::Decode,
        }
    }
}

/// A tracer event that could not be submitted, tagged with the tracer it was meant for.
#[derive(Debug, Error)]
#[error("tracer {tracer_id}: {error}")]
pub struct EventSubmitFailure {
    pub tracer_id: TracerId,
    #[source]
    pub error: ClientError,
}

pub type Result<T> = std::result::Result<T, ClientError>;
