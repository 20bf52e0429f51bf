//! Error types for the legend pipeline.
//!
//! Absence of an optional field is never an error; malformed input is.

use thiserror::Error;

/// Errors returned by [`crate::builder::LegendBuilder::build`].
#[derive(Error, Debug)]
pub enum LegendError {
    #[error("invalid service URL: {0}")]
    Input(#[from] InputError),

    #[error("legend fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("legend parse failed: {0}")]
    Parse(#[from] ParseError),
}

/// Service URL could not be sanitized. Raised before any network call.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("URL is empty")]
    Empty,

    #[error("cannot parse {url:?}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Transport or response failure while fetching the legend JSON.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Curl(#[from] curl::Error),

    #[error("HTTP {0}")]
    Http(u32),

    #[error("empty response body")]
    EmptyBody,

    #[error("response body is not valid UTF-8")]
    InvalidUtf8,
}

/// Legend JSON is malformed or holds a value that cannot be coerced.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: expected {expected}")]
    UnexpectedType { path: String, expected: &'static str },

    #[error("{path}: {value:?} is not a valid integer")]
    InvalidInteger { path: String, value: String },

    #[error("{path}: symbol has an image url but its layer has no layerId")]
    OrphanSymbolUrl { path: String },
}
