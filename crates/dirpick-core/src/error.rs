//! Error types for listing and preference operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while listing a directory.
#[derive(Debug, Error)]
pub enum ListError {
    /// The directory reference was empty.
    #[error("Directory path cannot be empty")]
    EmptyPath,

    /// Path does not exist or is not a directory.
    #[error("Directory not found: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied while enumerating the directory.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error while enumerating the directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => {
                Self::NotFound { path }
            }
            _ => Self::Io { path, source },
        }
    }

    /// The directory exists but could not be read.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. } | Self::Io { .. })
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::EmptyPath => None,
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => {
                Some(path)
            }
        }
    }
}

/// Errors raised by a sort preference store.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Reading or writing the backing file failed.
    #[error("Preference I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not valid.
    #[error("Invalid preference file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Preferences could not be serialized.
    #[error("Failed to serialize preferences: {message}")]
    Serialize { message: String },

    /// No per-user configuration directory is available.
    #[error("No configuration directory available")]
    NoConfigDir,

    /// A stored sort mode is not recognized.
    #[error("Unknown sort mode: {value}")]
    InvalidMode { value: String },
}
