use std::{
    fs::{self, read_dir},
    io::Result,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use normpath::PathExt;

use crate::{
    excludes::ExclusionSet,
    record::{EntryKinds, EntryRecord},
};

pub struct ListContext {
    pub kinds: EntryKinds,
    pub excludes: ExclusionSet,
}

impl ListContext {
    pub fn new(kinds: EntryKinds, excludes: ExclusionSet) -> Self {
        ListContext { kinds, excludes }
    }
}

/// Resolve `dir` to an absolute path without `.`/`..` components.
///
/// On Windows this avoids the `\\?\` prefix `canonicalize` would add, so the
/// paths stay usable on a command line.
pub fn resolve_root(dir: &Path) -> Result<PathBuf> {
    Ok(dir.normalize()?.into_path_buf())
}

/// List the direct children of `dir` that `ctx` admits, in enumeration order.
///
/// Opening `dir` is the only hard failure. Entries that cannot be inspected
/// are logged and skipped.
pub fn list_dir(dir: &Path, ctx: &ListContext) -> Result<Vec<EntryRecord>> {
    let root = resolve_root(dir)?;
    let rd = read_dir(&root)?;

    let mut records = Vec::new();
    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[list] error reading entry in {:?}: {e}", root);
                continue;
            }
        };

        match inspect_fs_entry(&entry, &root, ctx) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => {
                warn!("[list] inspect_entry {:?} failed: {e}", entry.path());
            }
        }
    }

    debug!(
        "[list] {} entries kept in {}",
        records.len(),
        root.display()
    );
    Ok(records)
}

fn inspect_fs_entry(
    entry: &fs::DirEntry,
    root: &Path,
    ctx: &ListContext,
) -> Result<Option<EntryRecord>> {
    let name_os = entry.file_name();
    let name = match name_os.to_str() {
        Some(s) => s.to_owned(),
        None => {
            warn!("[list] skipping non UTF-8 name {:?}", name_os);
            return Ok(None);
        }
    };

    // Follow symlinks: a link to a file lists as a file.
    let metadata = fs::metadata(entry.path())?;
    let is_dir = metadata.is_dir();
    if !is_dir && !metadata.is_file() {
        debug!("[list] skipping special entry {name:?}");
        return Ok(None);
    }

    if !ctx.kinds.admits(is_dir) {
        return Ok(None);
    }

    if ctx.excludes.is_excluded(&name, is_dir) {
        debug!("[list] excluded {name:?}");
        return Ok(None);
    }

    Ok(Some(EntryRecord::new(root, name, is_dir)))
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
