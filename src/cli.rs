//! CLI module - Command-line interface definitions and request dispatch

use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::RequestError;
use crate::core::model::{SearchRequest, ACTION_SCAN};
use crate::core::render::OutputFormat;

/// fuzzscan - answer a JSON search request with ranked, streamed JSON responses.
#[derive(Parser, Debug)]
#[command(name = "fuzzscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"fuzzscan reads a single JSON request (from stdin by default), walks the
requested directory tree and prints one JSON document per response.

Request fields:
- action: must be "scan"
- project_path: root directory to search
- query: search string (empty matches every file with score 1.0)
- skip_dirs: extra directory names to prune (optional)
- max_time, max_results, chunk_size: limits (optional, 0 = default 10/1000/200)

Every chunk_size accepted files a partial response with the full ranked list
so far is printed. The last response always has "complete": true and carries
"error" when the scan stopped early.

Examples:
    echo '{"action":"scan","project_path":".","query":"main"}' | fuzzscan
    fuzzscan --input request.json --compact
"#
)]
pub struct Cli {
    /// Read the request from FILE instead of stdin.
    #[arg(
        long,
        env = "FUZZSCAN_INPUT",
        value_name = "FILE",
        long_help = "Read the JSON request from FILE instead of standard input.\n\n\
The file must contain exactly one JSON object. Can also be set with FUZZSCAN_INPUT."
    )]
    pub input: Option<PathBuf>,

    /// Print each response as single-line JSON.
    #[arg(
        long,
        long_help = "Print each response as a single line of JSON instead of the default\n\
two-space indented document. Useful for line-oriented consumers."
    )]
    pub compact: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(
        short,
        long,
        long_help = "Only report errors on stderr. Responses are still printed to stdout.\n\
RUST_LOG takes precedence when set."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr (scan parameters, chunk emission,\n\
skipped entries). RUST_LOG takes precedence when set."
    )]
    pub verbose: bool,
}

/// Read the whole request document from a file or stdin
pub fn read_input(input: Option<&Path>) -> Result<String, RequestError> {
    let mut buf = String::new();
    match input {
        Some(path) => {
            File::open(path)?.read_to_string(&mut buf)?;
        }
        None => {
            io::stdin().lock().read_to_string(&mut buf)?;
        }
    }
    Ok(buf)
}

/// Decode a request and make sure its action is supported
pub fn parse_request(raw: &str) -> Result<SearchRequest, RequestError> {
    let request: SearchRequest = serde_json::from_str(raw)?;
    if request.action != ACTION_SCAN {
        return Err(RequestError::UnknownAction(request.action));
    }
    Ok(request)
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };

    let raw = read_input(cli.input.as_deref())?;
    let request = parse_request(&raw)?;
    debug!(action = %request.action, project_path = %request.project_path, "request decoded");

    crate::backends::scan::run_scan(&request, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_scan() {
        let request =
            parse_request(r#"{"action":"scan","project_path":"/tmp","query":"x"}"#).unwrap();
        assert_eq!(request.project_path, "/tmp");
        assert_eq!(request.query, "x");
    }

    #[test]
    fn test_parse_request_unknown_action() {
        let err = parse_request(r#"{"action":"index","project_path":"/tmp"}"#).unwrap_err();
        assert!(matches!(err, RequestError::UnknownAction(ref a) if a == "index"));
    }

    #[test]
    fn test_parse_request_missing_action() {
        let err = parse_request(r#"{"project_path":"/tmp"}"#).unwrap_err();
        assert!(matches!(err, RequestError::UnknownAction(ref a) if a.is_empty()));
    }

    #[test]
    fn test_parse_request_malformed() {
        let err = parse_request("{not json").unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn test_read_input_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("request.json");
        std::fs::write(&path, r#"{"action":"scan"}"#).unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), r#"{"action":"scan"}"#);
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/request.json"))).unwrap_err();
        assert!(matches!(err, RequestError::Read(_)));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["fuzzscan", "--input", "req.json", "--compact", "-v"]);
        assert_eq!(cli.input, Some(PathBuf::from("req.json")));
        assert!(cli.compact);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
