//! Error types for proxy client operations.

use thiserror::Error;

/// Everything a `Client` call can fail with. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum MartianError {
    /// The proxy address could not be turned into a forward proxy.
    #[error("invalid proxy address {addr}: {source}")]
    InvalidProxy {
        addr: String,
        #[source]
        source: reqwest::Error,
    },

    /// The proxy host alias is not a valid URL host.
    #[error("invalid proxy host {0}")]
    InvalidProxyHost(String),

    /// Connection, timeout, or body read failure.
    #[error("transport error on {method} {url}: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The proxy answered with a non-2xx status.
    #[error("error on {method} {url}: HTTP {status}: {body}")]
    Protocol {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to serialize modifier: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("malformed verification response: {0}")]
    Parse(#[from] ParseError),

    #[error("logger not registered: {0}")]
    LoggerNotFound(String),
}

/// The verification body did not have the `{"errors":[{"message":...}]}` shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected {expected}, got: {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected property: {expected}, got: {found}")]
    UnexpectedField {
        expected: &'static str,
        found: String,
    },

    #[error("expected property: {expected}")]
    MissingField { expected: &'static str },
}

/// Result type alias for `MartianError`.
pub type Result<T> = std::result::Result<T, MartianError>;
