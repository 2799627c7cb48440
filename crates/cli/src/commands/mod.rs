pub mod list;

use clap::Subcommand;
pub use list::ListArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List files only (the default when no subcommand is given).
    ///
    /// Example:
    ///   natlist files
    ///   natlist files --exclude '*.txt'
    Files(ListArgs),

    /// List files and folders.
    ///
    /// Folder paths become the batch command's targets.
    ///
    /// Example:
    ///   natlist entries --json
    Entries(ListArgs),
}
