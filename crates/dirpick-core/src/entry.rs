//! Directory entry type.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::mime::{DIR_MIMETYPE, infer_mimetype};

/// One immediate child of a listed directory.
///
/// Two entries with the same `path` describe the same filesystem object;
/// consumers should key any per-entry state (selection, thumbnails) on it
/// rather than on list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute path of the entry.
    pub path: PathBuf,

    /// Display name (last path component).
    pub name: CompactString,

    /// Whether the entry is a directory.
    pub is_dir: bool,

    /// Size in bytes, always 0 for directories.
    pub size: u64,

    /// Last modification time.
    pub modified: SystemTime,

    /// `"DIR"` for directories, otherwise guessed from the name.
    pub mimetype: CompactString,
}

impl Entry {
    /// Create a file entry.
    pub fn new_file(path: impl Into<PathBuf>, size: u64, modified: SystemTime) -> Self {
        let path = path.into();
        let name = display_name(&path);
        let mimetype = infer_mimetype(&name).into();
        Self {
            path,
            name,
            is_dir: false,
            size,
            modified,
            mimetype,
        }
    }

    /// Create a directory entry.
    pub fn new_directory(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        let path = path.into();
        Self {
            name: display_name(&path),
            path,
            is_dir: true,
            size: 0,
            modified,
            mimetype: DIR_MIMETYPE.into(),
        }
    }

    /// Modification time as milliseconds since the Unix epoch.
    ///
    /// Times before the epoch come out negative.
    pub fn modified_millis(&self) -> i64 {
        match self.modified.duration_since(UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
            Err(e) => -i64::try_from(e.duration().as_millis()).unwrap_or(i64::MAX),
        }
    }

    /// Whether the entry looks like an image (thumbnail candidate).
    pub fn is_image(&self) -> bool {
        !self.is_dir && self.mimetype.starts_with("image/")
    }
}

fn display_name(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(path.to_string_lossy()))
}
