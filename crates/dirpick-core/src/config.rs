//! Lister configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::listing::ListFilter;

/// Preference scope of the upload picker.
pub const UPLOAD_SCOPE: &str = "upload";

/// Configuration for a directory lister.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ListerConfig {
    /// Preference scope the sort order is stored under.
    #[builder(default = "UPLOAD_SCOPE.to_string()")]
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Include hidden entries (starting with .).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Names to leave out of listings (exact, `prefix*` or `*suffix`).
    #[builder(default)]
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_scope() -> String {
    UPLOAD_SCOPE.to_string()
}

impl ListerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref scope) = self.scope {
            if scope.trim().is_empty() {
                return Err("Scope cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ListerConfig {
    /// Create a new lister config builder.
    pub fn builder() -> ListerConfigBuilder {
        ListerConfigBuilder::default()
    }

    /// Create a config for a scope with default filtering.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            include_hidden: true,
            ignore_patterns: Vec::new(),
        }
    }

    /// Check if a name should be ignored based on patterns.
    pub fn should_ignore(&self, name: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| {
            if let Some(prefix) = pattern.strip_suffix('*') {
                name.starts_with(prefix)
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                name.ends_with(suffix)
            } else {
                name == pattern
            }
        })
    }

    /// Filter for a listing call.
    pub fn filter(&self, directories_only: bool) -> ListFilter {
        ListFilter::new(directories_only, self.include_hidden)
    }

    /// Whether a child passes both the filter and the ignore patterns.
    pub fn accepts(&self, filter: &ListFilter, name: &str, is_dir: bool) -> bool {
        filter.accepts(name, is_dir) && !self.should_ignore(name)
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self::new(UPLOAD_SCOPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ListerConfig::builder()
            .scope("downloads")
            .include_hidden(false)
            .build()
            .unwrap();

        assert_eq!(config.scope, "downloads");
        assert!(!config.include_hidden);
        assert!(config.ignore_patterns.is_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let config = ListerConfig::builder().build().unwrap();
        assert_eq!(config.scope, UPLOAD_SCOPE);
        assert!(config.include_hidden);
    }

    #[test]
    fn test_builder_rejects_empty_scope() {
        assert!(ListerConfig::builder().scope("  ").build().is_err());
    }

    #[test]
    fn test_should_ignore() {
        let config = ListerConfig::builder()
            .ignore_patterns(vec!["node_modules".to_string(), "*.log".to_string(), "tmp*".to_string()])
            .build()
            .unwrap();

        assert!(config.should_ignore("node_modules"));
        assert!(config.should_ignore("test.log"));
        assert!(config.should_ignore("tmp-1"));
        assert!(!config.should_ignore("src"));
    }

    #[test]
    fn test_accepts_combines_filter_and_patterns() {
        let mut config = ListerConfig::default();
        config.ignore_patterns.push("*.bak".to_string());
        config.include_hidden = false;

        let filter = config.filter(false);
        assert!(config.accepts(&filter, "a.txt", false));
        assert!(!config.accepts(&filter, "a.bak", false));
        assert!(!config.accepts(&filter, ".env", false));
        assert!(!config.accepts(&config.filter(true), "a.txt", false));
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: ListerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.scope, UPLOAD_SCOPE);
        assert!(config.include_hidden);
    }
}
