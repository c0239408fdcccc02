//! Builder pattern for Pipeline configuration
//!
//! Provides a fluent, self-documenting API for creating configured Pipeline instances.
//!
//! # Example
//!
//! ```rust
//! use ng_http2js_core::pipeline::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new("app.templates")
//!     .strip_prefix("src/")
//!     .prefix("/static/")
//!     .build();
//! assert!(pipeline.is_empty());
//! ```

use std::sync::Arc;

use super::Pipeline;
use crate::config::TransformConfig;
use crate::diagnostics::DiagnosticHandler;

/// Builder for configuring and constructing a [`Pipeline`] instance.
///
/// # Required Fields
///
/// - `module_name`: the AngularJS module the generated file registers
///
/// # Optional Configuration
///
/// - `cache_id`: cache to populate (defaults to `$http`)
/// - `strip_prefix`: leading path segment removed from URLs
/// - `prefix`: text prepended to URLs after stripping
/// - `rename`: final URL transform
/// - `diagnostic_handler`: error channel (defaults to a collecting handler)
pub struct PipelineBuilder {
    config: TransformConfig,
    diagnostic_handler: Option<Arc<dyn DiagnosticHandler>>,
}

impl PipelineBuilder {
    /// Creates a new builder for the given module name.
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            config: TransformConfig::new(module_name),
            diagnostic_handler: None,
        }
    }

    /// Starts from an existing configuration, e.g. one loaded from a file.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ng_http2js_core::config::TransformConfig;
    /// use ng_http2js_core::pipeline::PipelineBuilder;
    ///
    /// let config = TransformConfig::from_json_str(r#"{"moduleName": "app"}"#).unwrap();
    /// let pipeline = PipelineBuilder::from_config(config).cache_id("views").build();
    /// assert_eq!(pipeline.config().effective_cache_id(), "views");
    /// ```
    pub fn from_config(config: TransformConfig) -> Self {
        Self {
            config,
            diagnostic_handler: None,
        }
    }

    /// Sets the id of the cache the generated module populates.
    pub fn cache_id(mut self, cache_id: impl Into<String>) -> Self {
        self.config.cache_id = Some(cache_id.into());
        self
    }

    /// Sets the leading path segment stripped from derived URLs.
    ///
    /// The segment is only removed when the normalized path starts with it.
    pub fn strip_prefix(mut self, strip_prefix: impl Into<String>) -> Self {
        self.config.strip_prefix = Some(strip_prefix.into());
        self
    }

    /// Sets the text prepended to every derived URL.
    ///
    /// No separator is inserted, so include a trailing `/` where one is needed.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Sets the function applied last to every derived URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ng_http2js_core::file::InputFile;
    /// use ng_http2js_core::pipeline::PipelineBuilder;
    ///
    /// let mut pipeline = PipelineBuilder::new("app")
    ///     .rename(|url| format!("{}.cached", url))
    ///     .build();
    /// pipeline.ingest(InputFile::new("a.html", "A"));
    /// assert_eq!(pipeline.requests()[0].uri, "a.html.cached");
    /// ```
    pub fn rename<F>(mut self, rename: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.config.rename = Some(Arc::new(rename));
        self
    }

    /// Sets the handler that receives non-fatal errors.
    pub fn diagnostic_handler(mut self, handler: Arc<dyn DiagnosticHandler>) -> Self {
        self.diagnostic_handler = Some(handler);
        self
    }

    /// Builds and returns a configured [`Pipeline`] instance.
    pub fn build(self) -> Pipeline {
        match self.diagnostic_handler {
            Some(handler) => Pipeline::with_diagnostic_handler(self.config, handler),
            None => Pipeline::new(self.config),
        }
    }
}
