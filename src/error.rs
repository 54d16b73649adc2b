//! Error types for URL parsing and manipulation.

use thiserror::Error;

/// Errors that can occur while parsing, building or mutating a [`Url`](crate::Url).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The URL string could not be split into its components.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// The netloc does not have the `[user[:password]@]host[:port]` shape.
    #[error("Malformed authority: {0:?}")]
    MalformedAuthority(String),

    /// The port is not a decimal number in the 0-65535 range.
    #[error("Invalid port value: {0:?}")]
    InvalidPort(String),
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::MalformedUrl(err.to_string())
    }
}
