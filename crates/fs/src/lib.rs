mod excludes;
mod lister;
mod record;

pub use excludes::ExclusionSet;
pub use lister::{ListContext, list_dir, resolve_root};
pub use record::{EntryKinds, EntryRecord, split_extension};
