//! Ordered result of listing one directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::sort::{EntryComparator, SortOrder, sort_entries};

/// Filter applied before ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Keep only directories.
    pub directories_only: bool,
    /// Keep names starting with `.`.
    pub include_hidden: bool,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self::new(false, true)
    }
}

impl ListFilter {
    pub fn new(directories_only: bool, include_hidden: bool) -> Self {
        Self {
            directories_only,
            include_hidden,
        }
    }

    /// Check whether an entry that exists on disk passes the filter.
    pub fn accepts(&self, name: &str, is_dir: bool) -> bool {
        if self.directories_only && !is_dir {
            return false;
        }
        self.include_hidden || !name.starts_with('.')
    }
}

/// Entries of one directory, directories first, in `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Directory that was listed.
    pub directory: PathBuf,

    /// Ordering currently applied to `entries`.
    pub order: SortOrder,

    /// Filter the entries were produced with.
    pub filter: ListFilter,

    /// Ordered entries.
    pub entries: Vec<Entry>,
}

impl Listing {
    /// Build a listing, ordering `entries` with `order`.
    pub fn new(
        directory: impl Into<PathBuf>,
        mut entries: Vec<Entry>,
        order: SortOrder,
        filter: ListFilter,
    ) -> Self {
        sort_entries(&mut entries, &order);
        Self {
            directory: directory.into(),
            order,
            filter,
            entries,
        }
    }

    /// Re-order in place without touching the filesystem.
    pub fn resort(&mut self, order: SortOrder) {
        self.order = order;
        self.resort_by(&order);
    }

    /// Re-order with a custom comparator. `order` is left as it was.
    pub fn resort_by<C: EntryComparator + ?Sized>(&mut self, comparator: &C) {
        sort_entries(&mut self.entries, comparator);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Entry at a position in the current order.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Look up an entry by identity.
    pub fn find(&self, path: &Path) -> Option<&Entry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Current position of an entry.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    /// Number of directory entries at the head of the listing.
    pub fn dir_count(&self) -> usize {
        self.entries.iter().take_while(|e| e.is_dir).count()
    }

    pub fn file_count(&self) -> usize {
        self.len() - self.dir_count()
    }

    /// Sum of file sizes.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortDirection, SortMode};
    use std::time::UNIX_EPOCH;

    fn listing() -> Listing {
        Listing::new(
            "/d",
            vec![
                Entry::new_file("/d/b.txt", 100, UNIX_EPOCH),
                Entry::new_file("/d/a.txt", 50, UNIX_EPOCH),
                Entry::new_directory("/d/Z", UNIX_EPOCH),
            ],
            SortOrder::default(),
            ListFilter::default(),
        )
    }

    #[test]
    fn test_filter_accepts() {
        let all = ListFilter::new(false, true);
        assert!(all.accepts("a.txt", false));
        assert!(all.accepts(".git", true));

        let dirs = ListFilter::new(true, false);
        assert!(!dirs.accepts("a.txt", false));
        assert!(dirs.accepts("src", true));
        assert!(!dirs.accepts(".git", true));
    }

    #[test]
    fn test_resort_keeps_identity() {
        let mut listing = listing();
        let a = listing.find(Path::new("/d/a.txt")).cloned().unwrap();
        assert_eq!(listing.position(&a.path), Some(1));

        listing.resort(SortOrder::new(SortMode::Size, SortDirection::Descending));
        assert_eq!(listing.position(&a.path), Some(2));
        assert_eq!(listing.find(&a.path), Some(&a));
        assert_eq!(listing.order.mode, SortMode::Size);
    }

    #[test]
    fn test_counts() {
        let listing = listing();
        assert_eq!(listing.dir_count(), 1);
        assert_eq!(listing.file_count(), 2);
        assert_eq!(listing.total_size(), 150);
        assert_eq!((&listing).into_iter().count(), 3);
    }
}
