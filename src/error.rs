//! Error types for the tile pair browser
//!
//! Fetch failures are never retried; they are reported to the page message
//! area with an operation-specific text. Missing or stale selections are not
//! errors at all, they fall back to a default.

use thiserror::Error;

/// Failure of one request against the match service
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// A request path needs a selection that has not been made yet
    #[error("No {0} selected")]
    MissingSelection(&'static str),
}

/// Top-level error for the JavaScript-facing surface
#[derive(Debug, Clone, Error)]
pub enum TilePairError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Required page element is missing or has the wrong type
    #[error("Page element error: {0}")]
    Dom(String),
}

impl From<TilePairError> for wasm_bindgen::JsValue {
    fn from(err: TilePairError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
