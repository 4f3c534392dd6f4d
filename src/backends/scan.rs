//! File scanning backend
//!
//! Walks the tree under the project root with walkdir, scores every eligible
//! file and streams ranked snapshots to a `ResponseSink`.
//!
//! Every `chunk_size` accepted files the whole accumulated list is re-sorted
//! and emitted as a partial response. When the walk ends, for any reason, one
//! complete response carrying everything accepted is emitted.

use anyhow::Result;
use std::borrow::Cow;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::error::StopReason;
use crate::core::matcher;
use crate::core::model::{sort_by_score, FileResult, ScanOptions, SearchRequest, SearchResponse};
use crate::core::paths::{
    absolute_root, has_skipped_extension, is_hidden, make_relative, normalize_path, root_name,
    SkipDirs,
};
use crate::core::render::{JsonSink, OutputFormat, ResponseSink};

/// Outcome of a finished scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files accepted into the result set
    pub accepted: usize,
    /// Responses handed to the sink, the complete one included
    pub responses: usize,
    /// Why the walk ended early, if it did
    pub stopped: Option<StopReason>,
}

/// Abort conditions checked before each visited entry
struct Budget {
    started: Instant,
    max_time_secs: i64,
    max_results: i64,
}

impl Budget {
    fn new(options: &ScanOptions) -> Self {
        Self {
            started: Instant::now(),
            max_time_secs: options.max_time_secs,
            max_results: options.max_results,
        }
    }

    fn check(&self, accepted: usize) -> Option<StopReason> {
        if self.timed_out(self.started.elapsed()) {
            return Some(StopReason::Timeout);
        }
        if accepted as i64 >= self.max_results {
            return Some(StopReason::MaxResults);
        }
        None
    }

    fn timed_out(&self, elapsed: Duration) -> bool {
        // A negative budget is already spent
        match u64::try_from(self.max_time_secs) {
            Ok(secs) => elapsed > Duration::from_secs(secs),
            Err(_) => true,
        }
    }
}

/// Chunk buffer plus the cumulative, score-ordered result list
struct Accumulator<'a, S: ResponseSink> {
    sink: &'a mut S,
    chunk_size: i64,
    chunk: Vec<FileResult>,
    all: Vec<FileResult>,
    accepted: usize,
    responses: usize,
}

impl<'a, S: ResponseSink> Accumulator<'a, S> {
    fn new(sink: &'a mut S, chunk_size: i64) -> Self {
        let capacity = usize::try_from(chunk_size).unwrap_or(0).min(4096);
        Self {
            sink,
            chunk_size,
            chunk: Vec::with_capacity(capacity),
            all: Vec::new(),
            accepted: 0,
            responses: 0,
        }
    }

    /// Add an accepted file, flushing a partial response when the chunk is full
    fn push(&mut self, file: FileResult) -> io::Result<()> {
        self.chunk.push(file);
        self.accepted += 1;

        if self.chunk.len() as i64 >= self.chunk_size {
            self.merge();
            let response = SearchResponse::partial(self.all.clone());
            self.sink.emit(&response)?;
            self.responses += 1;
            debug!(count = response.count, "emitted partial response");
        }
        Ok(())
    }

    fn merge(&mut self) {
        self.all.append(&mut self.chunk);
        sort_by_score(&mut self.all);
    }

    /// Emit the single complete response
    fn finish(mut self, stopped: Option<StopReason>) -> io::Result<ScanSummary> {
        self.merge();
        let error = stopped.as_ref().map(ToString::to_string);
        let response = SearchResponse::complete(std::mem::take(&mut self.all), error);
        self.sink.emit(&response)?;
        self.responses += 1;

        Ok(ScanSummary {
            accepted: self.accepted,
            responses: self.responses,
            stopped,
        })
    }
}

/// Scan `root` and stream ranked responses to `sink`.
///
/// `root` may be relative; results carry absolute paths. The root entry is
/// matched against the skip set by the name the caller gave it.
///
/// Per-entry filesystem errors are skipped. Only a failure to write the
/// complete response is returned as an error.
pub fn scan_files<S: ResponseSink>(
    root: &Path,
    options: &ScanOptions,
    sink: &mut S,
) -> io::Result<ScanSummary> {
    let requested_name = root_name(root);
    let root = absolute_root(root);
    let root = root.as_path();
    let skip_dirs = SkipDirs::with_extra(options.skip_dirs.iter().cloned());
    let budget = Budget::new(options);
    let mut acc = Accumulator::new(sink, options.chunk_size);

    debug!(
        root = %root.display(),
        query = %options.query,
        max_time = options.max_time_secs,
        max_results = options.max_results,
        chunk_size = options.chunk_size,
        "starting scan"
    );

    let stopped = walk(root, &requested_name, options, &skip_dirs, &budget, &mut acc);
    if let Some(reason) = &stopped {
        info!(%reason, accepted = acc.accepted, "scan stopped early");
    }

    let summary = acc.finish(stopped)?;
    debug!(
        accepted = summary.accepted,
        responses = summary.responses,
        stopped = ?summary.stopped,
        elapsed_ms = budget.started.elapsed().as_millis() as u64,
        "scan finished"
    );
    Ok(summary)
}

/// The traversal loop. Returns the reason it stopped early, if any.
fn walk<S: ResponseSink>(
    root: &Path,
    requested_name: &str,
    options: &ScanOptions,
    skip_dirs: &SkipDirs,
    budget: &Budget,
    acc: &mut Accumulator<'_, S>,
) -> Option<StopReason> {
    let mut entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if let Some(reason) = budget.check(acc.accepted) {
            return Some(reason);
        }

        let name = if entry.depth() == 0 {
            Cow::Borrowed(requested_name)
        } else {
            entry.file_name().to_string_lossy()
        };

        if entry.file_type().is_dir() {
            if skip_dirs.contains(&name) {
                entries.skip_current_dir();
            }
            continue;
        }

        if is_hidden(&name) || has_skipped_extension(&name) {
            continue;
        }

        let path = entry.path();
        let relative = make_relative(path, root).unwrap_or_else(|| normalize_path(path));
        let score = matcher::score(&name, &relative, &options.query);
        if !options.query.is_empty() && score == 0.0 {
            continue;
        }

        let file = FileResult {
            path: path.to_string_lossy().into_owned(),
            relative_path: relative,
            name: name.into_owned(),
            score,
        };
        if let Err(err) = acc.push(file) {
            return Some(StopReason::Output(err.to_string()));
        }
    }

    None
}

/// Run the scan action, writing responses to stdout
pub fn run_scan(request: &SearchRequest, format: OutputFormat) -> Result<()> {
    let options = ScanOptions::from_request(request);

    let stdout = io::stdout();
    let mut sink = JsonSink::new(stdout.lock(), format);
    scan_files(Path::new(&request.project_path), &options, &mut sink)?;

    Ok(())
}
