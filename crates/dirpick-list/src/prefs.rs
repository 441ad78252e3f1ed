//! Sort order persistence.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dirpick_core::{PreferenceError, SortMode, SortOrder};

/// Stores one sort order per scope.
pub trait PreferenceStore {
    /// Stored order for `scope`, or `None` if nothing was saved yet.
    fn sort_order(&self, scope: &str) -> Result<Option<SortOrder>, PreferenceError>;

    /// Persist `order` for `scope`.
    fn set_sort_order(&mut self, scope: &str, order: SortOrder) -> Result<(), PreferenceError>;
}

/// Process-local store, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    orders: HashMap<String, SortOrder>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a scope.
    pub fn with_order(mut self, scope: impl Into<String>, order: SortOrder) -> Self {
        self.orders.insert(scope.into(), order);
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn sort_order(&self, scope: &str) -> Result<Option<SortOrder>, PreferenceError> {
        Ok(self.orders.get(scope).copied())
    }

    fn set_sort_order(&mut self, scope: &str, order: SortOrder) -> Result<(), PreferenceError> {
        self.orders.insert(scope.to_string(), order);
        Ok(())
    }
}

/// On-disk layout of the preferences file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    sort: BTreeMap<String, StoredOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredOrder {
    mode: String,
    #[serde(default = "default_true")]
    ascending: bool,
}

fn default_true() -> bool {
    true
}

impl From<SortOrder> for StoredOrder {
    fn from(order: SortOrder) -> Self {
        Self {
            mode: order.mode.to_string(),
            ascending: order.is_ascending(),
        }
    }
}

/// Store backed by a TOML file, written on every change.
///
/// ```toml
/// [sort.upload]
/// mode = "size"
/// ascending = false
/// ```
#[derive(Debug, Clone)]
pub struct TomlPreferences {
    path: PathBuf,
    file: PreferenceFile,
}

impl TomlPreferences {
    /// Default location under the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirpick").join("preferences.toml"))
    }

    /// Load from the default location.
    pub fn load_default() -> Result<Self, PreferenceError> {
        let path = Self::default_path().ok_or(PreferenceError::NoConfigDir)?;
        Self::load(path)
    }

    /// Load from `path`. A missing file reads as empty.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let file = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| PreferenceError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PreferenceFile::default(),
            Err(source) => return Err(PreferenceError::Io { path, source }),
        };
        Ok(Self { path, file })
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PreferenceError> {
        let io_err = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(&self.file).map_err(|e| PreferenceError::Serialize {
            message: e.to_string(),
        })?;

        std::fs::write(&self.path, content).map_err(io_err)
    }
}

impl PreferenceStore for TomlPreferences {
    fn sort_order(&self, scope: &str) -> Result<Option<SortOrder>, PreferenceError> {
        self.file
            .sort
            .get(scope)
            .map(|stored| {
                SortMode::parse(&stored.mode).map(|mode| SortOrder::from_parts(mode, stored.ascending))
            })
            .transpose()
    }

    fn set_sort_order(&mut self, scope: &str, order: SortOrder) -> Result<(), PreferenceError> {
        self.file.sort.insert(scope.to_string(), order.into());
        self.save()
    }
}
