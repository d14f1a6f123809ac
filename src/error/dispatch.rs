use std::time::Duration;

use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Request has no Host header; cannot build a target URL.")]
    MissingHost,
    #[error("Invalid target URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid HTTP method '{method}': {source}")]
    InvalidMethod {
        method: String,
        #[source]
        source: http::method::InvalidMethod,
    },
    #[error("Invalid header name '{name}': {source}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },
    #[error("Invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },
    #[error("Invalid proxy URL '{url}': {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request timed out after {}s.", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body: {source}")]
    ReadBody {
        #[source]
        source: reqwest::Error,
    },
}

impl DispatchError {
    /// Classifies a client error, folding timeouts into [`DispatchError::Timeout`].
    pub(crate) fn from_transport(source: reqwest::Error, timeout: Duration) -> Self {
        if source.is_timeout() {
            Self::Timeout { timeout }
        } else {
            Self::Transport { source }
        }
    }

    pub(crate) fn from_body(source: reqwest::Error, timeout: Duration) -> Self {
        if source.is_timeout() {
            Self::Timeout { timeout }
        } else {
            Self::ReadBody { source }
        }
    }
}
