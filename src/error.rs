use thiserror::Error;

/// Failures while setting up a client. API errors are reported as data in
/// [`crate::http::RestResponse`] instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("path must be absolute on the configured API host: {0:?}")]
    InvalidPath(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
