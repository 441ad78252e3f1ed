//! Filesystem access used by the lister.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Attributes of one child, read at listing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub is_dir: bool,
    /// Byte length, 0 for directories.
    pub len: u64,
    pub modified: SystemTime,
}

impl EntryMetadata {
    pub fn file(len: u64, modified: SystemTime) -> Self {
        Self {
            is_dir: false,
            len,
            modified,
        }
    }

    pub fn directory(modified: SystemTime) -> Self {
        Self {
            is_dir: true,
            len: 0,
            modified,
        }
    }
}

impl From<&std::fs::Metadata> for EntryMetadata {
    fn from(metadata: &std::fs::Metadata) -> Self {
        let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
        if metadata.is_dir() {
            Self::directory(modified)
        } else {
            Self::file(metadata.len(), modified)
        }
    }
}

/// Read access to a directory tree.
pub trait Filesystem {
    /// Paths of the immediate children of `dir`.
    fn children(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Attributes of `path`, following symlinks.
    ///
    /// A path that no longer exists must fail with [`io::ErrorKind::NotFound`].
    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;

    /// Absolute form of `path`. The default returns it unchanged.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(path.to_path_buf())
    }
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn children(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            match entry {
                Ok(entry) => children.push(entry.path()),
                // Removed while the handle was open.
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(children)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        std::fs::metadata(path).map(|m| EntryMetadata::from(&m))
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        path.canonicalize()
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn children(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).children(dir)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        (**self).metadata(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}
