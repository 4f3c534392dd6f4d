//! fuzzscan - Streaming fuzzy file-name search
//!
//! fuzzscan reads one JSON request, walks the requested directory tree and
//! answers with ranked JSON responses:
//! - Tiered scoring (exact, prefix, substring, fuzzy) on names and paths
//! - Built-in and caller-supplied directory pruning
//! - Time and result-count budgets
//! - Chunked partial responses ahead of one complete response

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    cli::run(cli)
}
