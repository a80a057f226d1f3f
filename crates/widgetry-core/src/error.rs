//! Error types for the core crate.
//!
//! - [`ContentError`] - Loading and validating the embedded site content
//! - [`SearchError`] - Building search requests and decoding responses

use thiserror::Error;

/// Site content could not be loaded.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The TOML document is malformed or does not fit the schema.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),
    /// A navigation entry's path does not start with `/`.
    #[error("navigation path '{0}' must start with '/'")]
    InvalidNavPath(String),
    /// The dropdown declares no options.
    #[error("dropdown must declare at least one option")]
    NoOptions,
    /// Two dropdown options share a value.
    #[error("duplicate dropdown option value '{0}'")]
    DuplicateOption(String),
}

/// Search failures, from request construction to response decoding.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid search endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    /// The response body is not the expected JSON.
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The API answered with an error object.
    #[error("search API error ({code}): {info}")]
    Api { code: String, info: String },
    /// The response has neither results nor an error.
    #[error("search response contains no results block")]
    MissingResults,
    /// The request never produced a response body.
    #[error("search request failed: {0}")]
    Fetch(String),
}
