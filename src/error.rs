//! Error type shared by every ZeroBounce operation.

use thiserror::Error;

/// Errors returned by the ZeroBounce client.
///
/// Nothing is retried internally: each variant reaches the caller as soon as
/// the layer that produced it fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or an unmet precondition, raised before any
    /// network call (bad base URL, unreadable `.env` file, missing columns).
    #[error("configuration error: {0}")]
    Config(String),

    /// Network level failure: DNS, connection refused, TLS, timeout, or a
    /// body that could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with an unexpected status, or with a failure shaped
    /// body where a result was expected.
    ///
    /// `message` joins every value found in the error payload.
    #[error("API error (HTTP {status}): {message}")]
    Remote {
        /// HTTP status code of the response.
        status: u16,
        /// Normalized error message.
        message: String,
    },

    /// A successful response carried JSON that did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A derived accessor could not parse a raw field (date, timestamp).
    #[error("failed to parse {field}: {detail}")]
    Parse {
        /// Name of the raw field.
        field: &'static str,
        /// Parser message.
        detail: String,
    },

    /// Reading an upload source or writing a result file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {err}"))
    }
}

impl Error {
    /// HTTP status of a [`Error::Remote`] error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn parse(field: &'static str, detail: impl ToString) -> Self {
        Self::Parse {
            field,
            detail: detail.to_string(),
        }
    }
}
