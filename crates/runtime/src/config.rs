use std::path::{Path, PathBuf};

pub const PROGRAM_NAME: &str = "natlist";
pub const PROGRAM_LOG_LEVEL: &str = "NATLIST_LOG_LEVEL";

/// Report file written next to the listed entries.
pub const OUTPUT_FILE_NAME: &str = "natlist_output.txt";

/// Separator used for every joined list in the report.
pub const LIST_SEPARATOR: &str = ",";

/// Interpreter and entry script of the downstream batch translator.
pub const BATCH_INTERPRETER: &str = "python.exe";
pub const BATCH_SCRIPT: &str = "launch.py";
pub const BATCH_FLAGS: &[&str] = &["--headless", "--exec_dirs"];

/// Directory to list when the caller doesn't name one.
pub fn default_list_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Location of the report file for a given listing root.
pub fn output_path(root: &Path) -> PathBuf {
    root.join(OUTPUT_FILE_NAME)
}

/// File name of the running executable, used to keep the binary out of its own listing.
pub fn own_executable_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_name()?
        .to_str()
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
