//! Core types and ordering rules for dirpick.
//!
//! This crate provides the data model shared by the dirpick crates:
//! directory entries, sort configuration, the directories-first ordering,
//! listings, selection tracking and configuration.

mod config;
mod entry;
mod error;
mod listing;
mod mime;
mod selection;
mod sort;

pub use config::{ListerConfig, ListerConfigBuilder, ListerConfigBuilderError, UPLOAD_SCOPE};
pub use entry::Entry;
pub use error::{ListError, PreferenceError};
pub use listing::{ListFilter, Listing};
pub use mime::{DIR_MIMETYPE, UNKNOWN_MIMETYPE, infer_mimetype};
pub use selection::Selection;
pub use sort::{EntryComparator, SortDirection, SortMode, SortOrder, sort_entries, tie_break};
