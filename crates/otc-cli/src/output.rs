// Rust guideline compliant 2026-10-14

//! Report sinks for the CLI.

use otc_progress::{LineSink, Report, ReportSink};
use std::io::{self, Write};

/// Writes each report as one JSON object per line.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Creates the standard-output sink for the requested format.
///
/// # Arguments
/// * `json` - Emit JSON lines instead of star-delimited status lines
/// * `use_color` - Colour status lines (ignored for JSON)
pub fn create_sink(json: bool, use_color: bool) -> Box<dyn ReportSink> {
    if json {
        Box::new(JsonSink::new(io::stdout()))
    } else {
        Box::new(LineSink::stdout(use_color))
    }
}
