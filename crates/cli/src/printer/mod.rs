use std::{
    io::{self, Write},
    path::Path,
};

use serde::Serialize;

use crate::report::Report;

const RULE_WIDTH: usize = 60;
const RESULTS_TITLE: &str = " Results ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Framed text blocks.
    #[default]
    Human,
    /// A single JSON object for machine consumption.
    Json,
}

/// Trait for printing the outcome of a listing run.
pub trait ReportPrinter {
    /// Called when the directory had nothing to list.
    fn empty(&mut self, dir: &Path) -> io::Result<()>;

    /// Called once with the finished report and where it was saved, if anywhere.
    fn report(&mut self, report: &Report, saved_to: Option<&Path>) -> io::Result<()>;
}

/// Human-readable printer: the report text framed by rule lines.
pub struct HumanPrinter<W: Write> {
    out: W,
}

impl<W: Write> HumanPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl HumanPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// `----- Results -----` header and the plain rule closing the block.
pub fn rules() -> (String, String) {
    let side = "-".repeat(RULE_WIDTH);
    let header = format!("{side}{RESULTS_TITLE}{side}");
    let footer = "-".repeat(header.chars().count());
    (header, footer)
}

impl<W: Write> ReportPrinter for HumanPrinter<W> {
    fn empty(&mut self, dir: &Path) -> io::Result<()> {
        writeln!(self.out, "\n[info] No entries found in {}", dir.display())
    }

    fn report(&mut self, report: &Report, saved_to: Option<&Path>) -> io::Result<()> {
        let (header, footer) = rules();
        writeln!(self.out, "\n{header}")?;
        write!(self.out, "{}", report.render_text())?;
        writeln!(self.out, "{footer}")?;

        if let Some(path) = saved_to {
            writeln!(self.out, "\nResults have been saved to: {}", path.display())?;
        }
        self.out.flush()
    }
}

pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    report: &'a Report,
    saved_to: Option<String>,
}

impl<W: Write> ReportPrinter for JsonPrinter<W> {
    fn empty(&mut self, dir: &Path) -> io::Result<()> {
        let obj = serde_json::json!({
            "type": "empty",
            "dir": dir.to_string_lossy(),
        });
        writeln!(self.out, "{}", obj)
    }

    fn report(&mut self, report: &Report, saved_to: Option<&Path>) -> io::Result<()> {
        let obj = JsonReport {
            kind: "report",
            report,
            saved_to: saved_to.map(|p| p.to_string_lossy().into_owned()),
        };
        serde_json::to_writer(&mut self.out, &obj).map_err(io::Error::other)?;
        writeln!(self.out)
    }
}

/// Printer for `format` writing to stdout.
pub fn stdout_printer(format: OutputFormat) -> Box<dyn ReportPrinter> {
    match format {
        OutputFormat::Human => Box::new(HumanPrinter::stdout()),
        OutputFormat::Json => Box::new(JsonPrinter::stdout()),
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
