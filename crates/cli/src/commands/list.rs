use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};
use natlist_engine::sort_naturally;
use natlist_fs::{ExclusionSet, ListContext, list_dir, resolve_root};
use natlist_runtime::{default_list_root, output_path};

use crate::printer::{OutputFormat, ReportPrinter, stdout_printer};
use crate::report::{Report, Variant};

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Skip entries matching this gitignore-style pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Print the report as a single JSON object
    #[arg(long)]
    pub json: bool,

    /// Do not write the report file
    #[arg(long)]
    pub no_save: bool,
}

impl ListArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    fn exclusions(&self) -> Result<ExclusionSet> {
        let mut set = ExclusionSet::with_program_defaults();
        for pattern in &self.exclude {
            set.add_pattern(pattern)
                .with_context(|| format!("invalid exclude pattern {pattern:?}"))?;
        }
        Ok(set)
    }
}

pub fn run(variant: Variant, args: ListArgs) -> ExitCode {
    let mut printer = stdout_printer(args.format());
    let code = match execute(&default_list_root(), variant, &args, printer.as_mut()) {
        Ok(code) => code,
        Err(e) => {
            report_failure(&e, &mut io::stderr());
            ExitCode::FAILURE
        }
    };

    #[cfg(windows)]
    pause_if_interactive();

    code
}

/// List `dir`, sort naturally, save and print the report.
///
/// An empty listing is not an error: it is reported through `printer` and
/// yields a failure exit code.
pub fn execute(
    dir: &Path,
    variant: Variant,
    args: &ListArgs,
    printer: &mut dyn ReportPrinter,
) -> Result<ExitCode> {
    let root = resolve_root(dir).with_context(|| format!("cannot resolve {}", dir.display()))?;
    let ctx = ListContext::new(variant.kinds(), args.exclusions()?);

    let mut entries =
        list_dir(&root, &ctx).with_context(|| format!("failed to list {}", root.display()))?;

    if entries.is_empty() {
        info!("[list] nothing to list in {}", root.display());
        printer.empty(&root)?;
        return Ok(ExitCode::FAILURE);
    }

    sort_naturally(&mut entries, |e| e.name.as_str());
    let report = Report::from_entries(variant, &entries);

    let saved_to = if args.no_save {
        None
    } else {
        Some(save_report(&root, &report)?)
    };

    printer.report(&report, saved_to.as_deref())?;
    info!("[list] reported {} entries", entries.len());

    Ok(ExitCode::SUCCESS)
}

/// One stderr line per fault; the full chain only goes to the debug log.
fn report_failure<W: Write>(err: &anyhow::Error, out: &mut W) {
    debug!("[list] failed: {err:?}");
    let _ = writeln!(out, "\n[error] {err:#}");
}

fn save_report(root: &Path, report: &Report) -> Result<PathBuf> {
    let path = output_path(root);
    fs::write(&path, report.render_text())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(windows)]
fn pause_if_interactive() {
    use std::io::{BufRead, IsTerminal};

    if io::stdin().is_terminal() {
        println!("\nPress Enter to exit...");
        let _ = io::stdin().lock().read_line(&mut String::new());
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
