use std::path::Path;

use natlist_fs::{EntryKinds, EntryRecord};
use natlist_runtime::{BATCH_FLAGS, BATCH_INTERPRETER, BATCH_SCRIPT, LIST_SEPARATOR};
use serde::Serialize;

/// Which entries a run lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Files only.
    Files,
    /// Files and folders.
    Entries,
}

impl Variant {
    pub fn kinds(self) -> EntryKinds {
        match self {
            Variant::Files => EntryKinds::FILES,
            Variant::Entries => EntryKinds::FILES | EntryKinds::DIRS,
        }
    }
}

/// Every representation of one naturally sorted listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub variant: Variant,
    pub file_names: Vec<String>,
    pub file_stems: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_names: Option<Vec<String>>,
    pub file_paths: Vec<String>,
    pub file_paths_no_ext: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_paths: Option<Vec<String>>,
    pub command: String,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Report {
    /// Build from entries that are already in natural order.
    pub fn from_entries(variant: Variant, entries: &[EntryRecord]) -> Self {
        let (folders, files): (Vec<&EntryRecord>, Vec<&EntryRecord>) =
            entries.iter().partition(|e| e.is_dir);

        let file_names = files.iter().map(|f| f.name.clone()).collect();
        let file_stems = files.iter().map(|f| f.stem.clone()).collect();
        let file_paths = files.iter().map(|f| path_string(&f.full_path)).collect();
        let file_paths_no_ext: Vec<String> = files
            .iter()
            .map(|f| path_string(&f.path_without_ext()))
            .collect();

        let (folder_names, folder_paths) = match variant {
            Variant::Files => (None, None),
            Variant::Entries => (
                Some(folders.iter().map(|d| d.name.clone()).collect()),
                Some(
                    folders
                        .iter()
                        .map(|d| path_string(&d.full_path))
                        .collect::<Vec<_>>(),
                ),
            ),
        };

        // The translator takes directories: folder paths when folders are
        // listed, otherwise the extension-stripped file paths.
        let command = match &folder_paths {
            Some(dirs) => batch_command(dirs),
            None => batch_command(&file_paths_no_ext),
        };

        Report {
            variant,
            file_names,
            file_stems,
            folder_names,
            file_paths,
            file_paths_no_ext,
            folder_paths,
            command,
        }
    }

    /// Labelled text blocks, as written to the output file.
    pub fn render_text(&self) -> String {
        let mut blocks: Vec<(&str, String)> = vec![
            ("File names:", join(&self.file_names)),
            ("File names (no extension):", join(&self.file_stems)),
        ];
        if let Some(names) = &self.folder_names {
            blocks.push(("Folder names:", join(names)));
        }
        blocks.push(("Absolute paths:", join(&self.file_paths)));
        blocks.push((
            "Absolute paths (no extension):",
            join(&self.file_paths_no_ext),
        ));
        if let Some(paths) = &self.folder_paths {
            blocks.push(("Folder absolute paths:", join(paths)));
        }
        blocks.push((
            "Batch command (run from the translator root):",
            self.command.clone(),
        ));

        let mut out = String::new();
        for (i, (label, body)) in blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(label);
            out.push('\n');
            out.push_str(body);
            out.push('\n');
        }
        out
    }
}

fn join(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// `python.exe launch.py --headless --exec_dirs "<a>,<b>"`
pub fn batch_command(targets: &[String]) -> String {
    let mut parts = vec![BATCH_INTERPRETER, BATCH_SCRIPT];
    parts.extend_from_slice(BATCH_FLAGS);
    format!("{} \"{}\"", parts.join(" "), join(targets))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
