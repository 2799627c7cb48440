use std::path::{Path, PathBuf};

use bitflags::bitflags;

bitflags! {
    /// Which kinds of directory entries a listing returns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntryKinds: u8 {
        const FILES = 0b0000_0001;
        const DIRS  = 0b0000_0010;
    }
}

impl EntryKinds {
    #[inline]
    pub fn admits(self, is_dir: bool) -> bool {
        if is_dir {
            self.contains(EntryKinds::DIRS)
        } else {
            self.contains(EntryKinds::FILES)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// Absolute path: the resolved listing root joined with `name`.
    pub full_path: PathBuf,
    /// File or folder name
    pub name: String,
    /// Name without its final extension
    pub stem: String,
    pub is_dir: bool,
}

impl EntryRecord {
    pub fn new(root: &Path, name: String, is_dir: bool) -> Self {
        let stem = split_extension(&name).0.to_owned();
        EntryRecord {
            full_path: root.join(&name),
            name,
            stem,
            is_dir,
        }
    }

    /// Absolute path with the final extension removed.
    pub fn path_without_ext(&self) -> PathBuf {
        match self.full_path.parent() {
            Some(parent) => parent.join(&self.stem),
            None => PathBuf::from(&self.stem),
        }
    }
}

/// Split off the final extension the way `Path::file_stem` does: a leading dot
/// does not start an extension, so `.bashrc` has none.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    if name == ".." {
        return (name, None);
    }
    match name.rfind('.') {
        Some(0) | None => (name, None),
        Some(idx) => (&name[..idx], Some(&name[idx + 1..])),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
