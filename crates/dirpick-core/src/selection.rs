//! Checked-entry tracking keyed by path.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::listing::Listing;

/// Set of checked entries, keyed by path so it survives re-sorts.
///
/// Only files are checkable; directories are navigated, not picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    checked: HashSet<PathBuf>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as checked. Returns `true` if it was not checked before.
    pub fn check(&mut self, path: impl Into<PathBuf>) -> bool {
        self.checked.insert(path.into())
    }

    /// Returns `true` if the path was checked.
    pub fn uncheck(&mut self, path: &Path) -> bool {
        self.checked.remove(path)
    }

    /// Flip a path's state. Returns the new state.
    pub fn toggle(&mut self, path: &Path) -> bool {
        if self.checked.remove(path) {
            false
        } else {
            self.checked.insert(path.to_path_buf());
            true
        }
    }

    pub fn is_checked(&self, path: &Path) -> bool {
        self.checked.contains(path)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Checked paths in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.checked.iter().map(PathBuf::as_path)
    }

    /// Names of the checked entries in `listing`, in listing order.
    pub fn checked_names(&self, listing: &Listing) -> Vec<String> {
        listing
            .iter()
            .filter(|e| self.is_checked(&e.path))
            .map(|e| e.name.to_string())
            .collect()
    }

    /// Replace the selection with the files in `listing` whose names are in `names`.
    ///
    /// `names` is only read. An empty `names` leaves the selection untouched.
    pub fn restore_names<S: AsRef<str>>(&mut self, listing: &Listing, names: &[S]) {
        if names.is_empty() {
            return;
        }
        let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        self.checked = listing
            .iter()
            .filter(|e| !e.is_dir && wanted.contains(e.name.as_str()))
            .map(|e| e.path.clone())
            .collect();
    }

    /// Drop checked paths that are not part of `listing`.
    pub fn retain_listed(&mut self, listing: &Listing) {
        self.checked.retain(|p| listing.find(p).is_some());
    }
}
