//! Error types
//!
//! Two tiers: `RequestError` is fatal for the process and never reaches the
//! JSON protocol; `StopReason` ends a scan early and is reported inside the
//! final response.

use thiserror::Error;

/// Failure to obtain a usable request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Error reading input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Why a scan stopped before visiting every entry.
///
/// The `Display` text is the exact `error` string placed in the final response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopReason {
    #[error("search timeout exceeded")]
    Timeout,

    #[error("max results reached")]
    MaxResults,

    #[error("{0}")]
    Output(String),
}
