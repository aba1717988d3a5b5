//! Typed client-side error model.
//!
//! Every failed API call maps to exactly one [`ApiError`] variant. The
//! lookup and action components log these at debug level and otherwise
//! swallow them; nothing propagates beyond the task that issued the call.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or body-read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport success is status 200 exactly; anything else lands here.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// Response body was not the JSON shape we expect.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Application envelope carried `result: "failure"`.
    #[error("api rejected request: {0}")]
    Rejected(String),

    /// Endpoint path did not combine with the configured base URL.
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}
