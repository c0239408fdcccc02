use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::errors::TransformError;

/// Cache populated when no `cacheId` is configured
pub const DEFAULT_CACHE_ID: &str = "$http";

/// Final transform applied to a derived URL
pub type RenameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options that control how the generated module is registered and keyed
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    /// Name of the AngularJS module the output registers
    pub module_name: String,

    /// Cache to populate (default: `$http`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_id: Option<String>,

    /// Leading path segment removed from derived URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<String>,

    /// Prepended to derived URLs after stripping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Not representable in a config file; set programmatically
    #[serde(skip)]
    pub rename: Option<RenameFn>,
}

impl fmt::Debug for TransformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformConfig")
            .field("module_name", &self.module_name)
            .field("cache_id", &self.cache_id)
            .field("strip_prefix", &self.strip_prefix)
            .field("prefix", &self.prefix)
            .field("rename", &self.rename.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl TransformConfig {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Self::default()
        }
    }

    pub fn with_cache_id(mut self, cache_id: impl Into<String>) -> Self {
        self.cache_id = Some(cache_id.into());
        self
    }

    pub fn with_strip_prefix(mut self, strip_prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(strip_prefix.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_rename<F>(mut self, rename: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.rename = Some(Arc::new(rename));
        self
    }

    /// The configured cache id, falling back to [`DEFAULT_CACHE_ID`]
    pub fn effective_cache_id(&self) -> &str {
        self.cache_id.as_deref().unwrap_or(DEFAULT_CACHE_ID)
    }

    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self, TransformError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, TransformError> {
        serde_json::from_str(content).map_err(|e| TransformError::Config(e.to_string()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, TransformError> {
        serde_yaml::from_str(content).map_err(|e| TransformError::Config(e.to_string()))
    }

    /// Merge programmatic overrides into this configuration
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref module_name) = overrides.module_name {
            self.module_name = module_name.clone();
        }
        if let Some(ref cache_id) = overrides.cache_id {
            self.cache_id = Some(cache_id.clone());
        }
        if let Some(ref strip_prefix) = overrides.strip_prefix {
            self.strip_prefix = Some(strip_prefix.clone());
        }
        if let Some(ref prefix) = overrides.prefix {
            self.prefix = Some(prefix.clone());
        }
        if let Some(ref rename) = overrides.rename {
            self.rename = Some(Arc::clone(rename));
        }
    }
}

/// Values that take precedence over a file-loaded [`TransformConfig`]
#[derive(Clone, Default)]
pub struct ConfigOverrides {
    pub module_name: Option<String>,
    pub cache_id: Option<String>,
    pub strip_prefix: Option<String>,
    pub prefix: Option<String>,
    pub rename: Option<RenameFn>,
}
