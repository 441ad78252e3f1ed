//! Directory lister with directories-first ordering.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use dirpick_core::{
    Entry, ListError, ListFilter, ListerConfig, Listing, PreferenceError, SortOrder,
};

use crate::fs::{EntryMetadata, Filesystem, StdFilesystem};
use crate::prefs::{PreferenceStore, TomlPreferences};

/// Lists one directory at a time and keeps the result ordered.
///
/// The lister remembers the last directory, filter and listing so the
/// sort order can change without enumerating the filesystem again.
pub struct DirectoryLister<F, P> {
    fs: F,
    prefs: P,
    config: ListerConfig,
    order: SortOrder,
    current: Option<Listing>,
}

impl DirectoryLister<StdFilesystem, TomlPreferences> {
    /// Lister over the real filesystem with preferences in the user's config dir.
    pub fn open(config: ListerConfig) -> Result<Self, PreferenceError> {
        Ok(Self::new(StdFilesystem, TomlPreferences::load_default()?, config))
    }
}

impl<F: Filesystem, P: PreferenceStore> DirectoryLister<F, P> {
    /// Create a lister, reading its sort order from `prefs`.
    pub fn new(fs: F, prefs: P, config: ListerConfig) -> Self {
        let order = match prefs.sort_order(&config.scope) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                warn!(scope = %config.scope, error = %err, "falling back to default sort order");
                SortOrder::default()
            }
        };

        Self {
            fs,
            prefs,
            config,
            order,
            current: None,
        }
    }

    /// List the immediate children of `directory`.
    pub fn list(
        &mut self,
        directory: impl AsRef<Path>,
        directories_only: bool,
    ) -> Result<Listing, ListError> {
        let directory = directory.as_ref();
        if directory.as_os_str().is_empty() {
            return Err(ListError::EmptyPath);
        }

        let filter = self.config.filter(directories_only);
        let listing = self.read_listing(directory, filter)?;
        self.current = Some(listing.clone());
        Ok(listing)
    }

    /// List the last directory again with the last filter.
    pub fn refresh(&mut self) -> Result<Option<Listing>, ListError> {
        let Some((directory, filter)) = self
            .current
            .as_ref()
            .map(|l| (l.directory.clone(), l.filter))
        else {
            return Ok(None);
        };

        let listing = self.read_listing(&directory, filter)?;
        self.current = Some(listing.clone());
        Ok(Some(listing))
    }

    /// Change the sort order, re-order the last listing, and persist.
    ///
    /// The in-memory re-order happens even when persisting fails.
    pub fn set_sort_order(&mut self, order: SortOrder) -> Result<(), PreferenceError> {
        self.order = order;
        if let Some(listing) = self.current.as_mut() {
            listing.resort(order);
        }

        self.prefs
            .set_sort_order(&self.config.scope, order)
            .inspect_err(|err| {
                warn!(scope = %self.config.scope, error = %err, "failed to persist sort order");
            })
    }

    /// Re-order the last listing for this view only.
    ///
    /// The active order and the preference store are left as they are, so
    /// the next `list` or `refresh` uses the stored order again.
    pub fn resort_current(&mut self, order: SortOrder) -> Option<&Listing> {
        let listing = self.current.as_mut()?;
        listing.resort(order);
        Some(listing)
    }

    /// Active sort order.
    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// Most recent listing.
    pub fn current(&self) -> Option<&Listing> {
        self.current.as_ref()
    }

    /// Directory of the most recent listing.
    pub fn directory(&self) -> Option<&Path> {
        self.current.as_ref().map(|l| l.directory.as_path())
    }

    pub fn scope(&self) -> &str {
        &self.config.scope
    }

    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    fn read_listing(&self, directory: &Path, filter: ListFilter) -> Result<Listing, ListError> {
        let resolved = self
            .fs
            .canonicalize(directory)
            .map_err(|e| ListError::io(directory, e))?;
        let directory = resolved.as_path();

        match self.fs.metadata(directory) {
            Ok(meta) if meta.is_dir => {}
            Ok(_) => {
                return Err(ListError::NotFound {
                    path: directory.to_path_buf(),
                });
            }
            Err(err) => return Err(ListError::io(directory, err)),
        }

        let children = self
            .fs
            .children(directory)
            .map_err(|e| ListError::io(directory, e))?;
        let total = children.len();

        let entries: Vec<Entry> = children
            .into_iter()
            .filter_map(|path| self.read_entry(path, &filter))
            .collect();

        debug!(
            directory = %directory.display(),
            children = total,
            kept = entries.len(),
            order = %self.order.label(),
            "listed directory"
        );

        Ok(Listing::new(directory, entries, self.order, filter))
    }

    /// Build an entry for one child, or `None` if it is gone or filtered out.
    fn read_entry(&self, path: PathBuf, filter: &ListFilter) -> Option<Entry> {
        let meta = match self.fs.metadata(&path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                trace!(path = %path.display(), "child vanished before it could be read");
                return None;
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable child");
                return None;
            }
        };

        let name = path.file_name()?.to_string_lossy();
        if !self.config.accepts(filter, &name, meta.is_dir) {
            return None;
        }

        Some(entry_from(path, meta))
    }
}

fn entry_from(path: PathBuf, meta: EntryMetadata) -> Entry {
    if meta.is_dir {
        Entry::new_directory(path, meta.modified)
    } else {
        Entry::new_file(path, meta.len, meta.modified)
    }
}
