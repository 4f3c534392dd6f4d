//! Request / Response Model
//!
//! The scan request decoded from the input channel, and the response snapshots
//! written to the output channel. Every response a scan produces is a
//! `SearchResponse`; the wire shape is defined entirely by these types.

use serde::{Deserialize, Serialize};

/// Default wall-clock budget for one scan, in seconds
pub const DEFAULT_MAX_TIME_SECS: i64 = 10;

/// Default cap on accepted results
pub const DEFAULT_MAX_RESULTS: i64 = 1000;

/// Default number of accepted results between partial responses
pub const DEFAULT_CHUNK_SIZE: i64 = 200;

/// The only action this binary understands
pub const ACTION_SCAN: &str = "scan";

/// A single search request, decoded once per invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Requested action (only "scan" is handled)
    #[serde(default)]
    pub action: String,

    /// Root directory to scan
    #[serde(default)]
    pub project_path: String,

    /// Search string; empty matches everything
    #[serde(default)]
    pub query: String,

    /// Extra directory basenames to prune
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_dirs: Vec<String>,

    /// Time budget in seconds (0 = default)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_time: i64,

    /// Result cap (0 = default)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_results: i64,

    /// Results per partial response (0 = default)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub chunk_size: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Resolved scan parameters with defaults substituted.
///
/// Values other than zero are taken as-is, including negative ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub query: String,
    pub skip_dirs: Vec<String>,
    pub max_time_secs: i64,
    pub max_results: i64,
    pub chunk_size: i64,
}

impl ScanOptions {
    pub fn from_request(request: &SearchRequest) -> Self {
        Self {
            query: request.query.clone(),
            skip_dirs: request.skip_dirs.clone(),
            max_time_secs: or_default(request.max_time, DEFAULT_MAX_TIME_SECS),
            max_results: or_default(request.max_results, DEFAULT_MAX_RESULTS),
            chunk_size: or_default(request.chunk_size, DEFAULT_CHUNK_SIZE),
        }
    }

    /// Options for `query` with every limit at its default
    #[cfg(test)]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            skip_dirs: Vec::new(),
            max_time_secs: DEFAULT_MAX_TIME_SECS,
            max_results: DEFAULT_MAX_RESULTS,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

fn or_default(value: i64, default: i64) -> i64 {
    if value == 0 {
        default
    } else {
        value
    }
}

/// One matched file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    /// Path as reached from the project root (absolute when the root is)
    pub path: String,

    /// Path relative to the project root, using '/' as separator
    pub relative_path: String,

    /// Base name of the file
    pub name: String,

    /// Relevance score; higher is better
    pub score: f64,
}

/// One emitted snapshot of the accepted results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub files: Vec<FileResult>,
    pub count: usize,
    pub partial: bool,
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// A snapshot that will be followed by more responses
    pub fn partial(files: Vec<FileResult>) -> Self {
        Self {
            count: files.len(),
            files,
            partial: true,
            complete: false,
            error: None,
        }
    }

    /// The terminal snapshot of a scan
    pub fn complete(files: Vec<FileResult>, error: Option<String>) -> Self {
        Self {
            count: files.len(),
            files,
            partial: false,
            complete: true,
            error: error.filter(|e| !e.is_empty()),
        }
    }
}

/// Sort results by score, highest first.
///
/// The sort is stable: files with equal scores keep their discovery order.
pub fn sort_by_score(files: &mut [FileResult]) {
    files.sort_by(|a, b| b.score.total_cmp(&a.score));
}
