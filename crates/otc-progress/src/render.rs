// Rust guideline compliant 2026-10-12

//! Rendering of reports as star-delimited status lines.
//!
//! A line looks like
//!
//! ```text
//! *decode:      50% So far:     1m40s  Est total:     3m20s ETA:     1m40s  *
//! ```
//!
//! With colour enabled the estimate fields are drawn in white, green
//! (improving) or red (worsening).

use crate::report::Report;
use crate::status::Trend;
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Destination for emitted reports.
pub trait ReportSink {
    /// Delivers one report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn emit(&mut self, report: &Report) -> io::Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        (**self).emit(report)
    }
}

/// Builds report lines.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    use_color: bool,
}

impl Renderer {
    /// Creates a renderer.
    ///
    /// # Arguments
    ///
    /// * `use_color` - Whether to emit colour escapes
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Renders a report as a single line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the in-memory buffer fails.
    pub fn render(&self, report: &Report) -> io::Result<String> {
        let mut buf = if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };

        let total = report.estimated_total.as_deref().unwrap_or("");
        write!(
            buf,
            "*{}: {:7.*}% So far: {:>9} ",
            report.label, report.percent_decimals, report.percent, report.elapsed
        )?;

        if self.use_color {
            buf.set_color(&trend_color(report.trend))?;
        } else {
            write!(buf, " ")?;
        }
        write!(buf, "Est total: {:>9} ETA: {:>9}", total, report.eta)?;
        if self.use_color {
            buf.reset()?;
        }
        write!(buf, "  *")?;

        Ok(String::from_utf8_lossy(&buf.into_inner()).into_owned())
    }
}

fn trend_color(trend: Trend) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match trend {
        Trend::Neutral => spec.set_fg(Some(Color::White)),
        Trend::Improving => spec.set_fg(Some(Color::Green)).set_bold(true),
        Trend::Worsening => spec.set_fg(Some(Color::Red)).set_bold(true),
    };
    spec
}

/// Writes rendered lines to any writer, flushing after each.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
    renderer: Renderer,
}

impl<W: Write> LineSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W, renderer: Renderer) -> Self {
        Self { writer, renderer }
    }

    /// Returns the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<io::Stdout> {
    /// Creates a sink writing to standard output.
    pub fn stdout(use_color: bool) -> Self {
        Self::new(io::stdout(), Renderer::new(use_color))
    }
}

impl<W: Write> ReportSink for LineSink<W> {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        let line = self.renderer.render(report)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            label: "decode".to_string(),
            index: 500,
            total: 1_000,
            fraction: 0.5,
            percent: 50.0,
            percent_decimals: 0,
            elapsed_seconds: 100.0,
            elapsed: "1m40s".to_string(),
            eta_seconds: 100,
            eta: "1m40s".to_string(),
            estimated_total: Some("3m20s".to_string()),
            trend: Trend::Neutral,
            is_final: false,
        }
    }

    #[test]
    fn test_plain_line_layout() {
        let line = Renderer::new(false).render(&sample_report()).unwrap();
        assert_eq!(
            line,
            "*decode:      50% So far:     1m40s  Est total:     3m20s ETA:     1m40s  *"
        );
    }

    #[test]
    fn test_final_line_has_blank_total() {
        let mut report = sample_report();
        report.estimated_total = None;
        report.is_final = true;
        let line = Renderer::new(false).render(&report).unwrap();
        assert!(line.contains("Est total:           ETA:"));
    }

    #[test]
    fn test_percent_decimals() {
        let mut report = sample_report();
        report.percent = 99.91;
        report.percent_decimals = 2;
        let line = Renderer::new(false).render(&report).unwrap();
        assert!(line.starts_with("*decode:   99.91% "));
    }

    #[test]
    fn test_color_line_contains_escapes() {
        let mut report = sample_report();
        report.trend = Trend::Worsening;
        let line = Renderer::new(true).render(&report).unwrap();
        assert!(line.starts_with("*decode:"));
        assert!(line.ends_with("  *"));
        assert!(line.contains('\x1b'));
        assert!(line.contains("\x1b[31m") || line.contains("\x1b[38;5;1m"));
    }

    #[test]
    fn test_plain_line_has_no_escapes() {
        let line = Renderer::new(false).render(&sample_report()).unwrap();
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_line_sink_writes_newline_terminated_lines() {
        let mut sink = LineSink::new(Vec::new(), Renderer::new(false));
        sink.emit(&sample_report()).unwrap();
        sink.emit(&sample_report()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("*\n"));
    }
}
