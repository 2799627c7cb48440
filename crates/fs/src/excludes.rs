use std::{collections::BTreeSet, path::Path};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use natlist_runtime::{OUTPUT_FILE_NAME, own_executable_name};

/// Entries a listing must skip: exact names plus gitignore-style patterns.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
    patterns: Vec<String>,
    matcher: Gitignore,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        ExclusionSet {
            names: BTreeSet::new(),
            patterns: Vec::new(),
            matcher: Gitignore::empty(),
        }
    }
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the running executable and the report file this program writes.
    pub fn with_program_defaults() -> Self {
        let mut set = ExclusionSet::new();
        if let Some(exe) = own_executable_name() {
            set.add_name(exe);
        }
        set.add_name(OUTPUT_FILE_NAME);
        set
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.add_name(name);
        self
    }

    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Add one gitignore-style pattern (`*.tmp`, `build/`, `!keep.tmp`).
    pub fn add_pattern(&mut self, pattern: &str) -> Result<(), ignore::Error> {
        self.patterns.push(pattern.to_owned());
        match self.rebuild() {
            Ok(matcher) => {
                self.matcher = matcher;
                Ok(())
            }
            Err(e) => {
                self.patterns.pop();
                Err(e)
            }
        }
    }

    fn rebuild(&self) -> Result<Gitignore, ignore::Error> {
        // Only bare entry names are ever matched, so the root is never stripped.
        let mut builder = GitignoreBuilder::new(Path::new("."));
        for pat in &self.patterns {
            builder.add_line(None, pat)?;
        }
        builder.build()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        self.names.contains(name) || self.matcher.matched(Path::new(name), is_dir).is_ignore()
    }
}

#[cfg(test)]
#[path = "excludes_tests.rs"]
mod tests;
