//! Directory listing engine for dirpick.
//!
//! This crate lists the immediate children of one directory and keeps the
//! result ordered with directories first.
//!
//! # Overview
//!
//! - **[`DirectoryLister`]** enumerates, filters and orders entries
//! - **[`Filesystem`]** abstracts the reads it needs ([`StdFilesystem`] for `std::fs`)
//! - **[`PreferenceStore`]** persists the sort order per scope
//!   ([`TomlPreferences`] on disk, [`MemoryPreferences`] in memory)
//!
//! Children that disappear between enumeration and the attribute read are
//! dropped silently.
//!
//! # Example
//!
//! ```rust,no_run
//! use dirpick_list::{DirectoryLister, ListerConfig, SortMode, SortOrder};
//!
//! let mut lister = DirectoryLister::open(ListerConfig::default()).unwrap();
//! let listing = lister.list("/path/to/dir", false).unwrap();
//! for entry in &listing {
//!     println!("{} ({} bytes)", entry.name, entry.size);
//! }
//!
//! // Re-order the same listing and remember the choice.
//! lister
//!     .set_sort_order(SortOrder::from_parts(SortMode::Size, false))
//!     .unwrap();
//! ```

mod fs;
mod lister;
mod prefs;

pub use fs::{EntryMetadata, Filesystem, StdFilesystem};
pub use lister::DirectoryLister;
pub use prefs::{MemoryPreferences, PreferenceStore, TomlPreferences};

// Re-export core types for convenience
pub use dirpick_core::{
    Entry, ListError, ListFilter, ListerConfig, Listing, PreferenceError, Selection,
    SortDirection, SortMode, SortOrder, UPLOAD_SCOPE,
};
