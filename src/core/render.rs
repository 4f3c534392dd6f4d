//! Renderer module
//!
//! Writes SearchResponse snapshots to an output channel, one JSON document per
//! response, in emission order.

use crate::core::model::SearchResponse;
use std::io::{self, Write};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented JSON (two spaces), the default wire format
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

/// Destination for the responses of a scan.
///
/// `emit` must not return until the response has been handed off, so that
/// responses are observed in the order they were produced.
pub trait ResponseSink {
    fn emit(&mut self, response: &SearchResponse) -> io::Result<()>;
}

/// Sink writing newline-terminated JSON documents to a writer
pub struct JsonSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResponseSink for JsonSink<W> {
    fn emit(&mut self, response: &SearchResponse) -> io::Result<()> {
        let rendered = render(response, self.format)?;
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Render a single response in the given format
pub fn render(response: &SearchResponse, format: OutputFormat) -> io::Result<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(response),
        OutputFormat::Compact => serde_json::to_string(response),
    };
    rendered.map_err(io::Error::from)
}

/// Sink that keeps every response in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CollectSink {
    pub responses: Vec<SearchResponse>,
}

#[cfg(test)]
impl ResponseSink for CollectSink {
    fn emit(&mut self, response: &SearchResponse) -> io::Result<()> {
        self.responses.push(response.clone());
        Ok(())
    }
}
