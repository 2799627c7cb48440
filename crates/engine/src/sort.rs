use log::debug;

use crate::natural::natural_sort_key;

/// Stable natural sort of `items` by the name `name_of` extracts.
///
/// Items whose keys compare equal (for example `"a"` and `"A"`) keep their
/// original relative order. Each key is computed once.
pub fn sort_naturally<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| natural_sort_key(name_of(item)));
    debug!("[sort] ordered {} items naturally", items.len());
}

/// Natural sort of plain names, returning the sorted vector.
pub fn sorted_names<S: AsRef<str>>(mut names: Vec<S>) -> Vec<S> {
    sort_naturally(&mut names, |n| n.as_ref());
    names
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
