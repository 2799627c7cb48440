use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;
mod report;

use commands::{Command, ListArgs};
use natlist_runtime::{PROGRAM_NAME, logging};
use report::Variant;

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "List the current folder in natural order",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the default `files` listing
    #[command(flatten)]
    pub args: ListArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        None => commands::list::run(Variant::Files, cli.args),
        Some(Command::Files(args)) => commands::list::run(Variant::Files, args),
        Some(Command::Entries(args)) => commands::list::run(Variant::Entries, args),
    }
}
