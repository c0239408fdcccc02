//! Cache key derivation from file paths

use crate::config::{RenameFn, TransformConfig};

/// The subset of [`TransformConfig`] that shapes URLs
#[derive(Clone, Default)]
pub struct UrlOptions {
    pub strip_prefix: Option<String>,
    pub prefix: Option<String>,
    pub rename: Option<RenameFn>,
}

impl From<&TransformConfig> for UrlOptions {
    fn from(config: &TransformConfig) -> Self {
        Self {
            strip_prefix: config.strip_prefix.clone(),
            prefix: config.prefix.clone(),
            rename: config.rename.clone(),
        }
    }
}

/// Derive the cache key for `path`.
///
/// Steps run in a fixed order: separators are normalized to `/`, the
/// `strip_prefix` is removed, `prefix` is prepended verbatim and finally
/// `rename` gets the last word. Empty options are treated as unset.
pub fn derive_url(path: &str, options: &UrlOptions) -> String {
    let mut url = path.replace('\\', "/");

    if let Some(strip) = options.strip_prefix.as_deref().filter(|s| !s.is_empty()) {
        if url.starts_with(strip) {
            // First match, not an anchored slice; equivalent while the
            // starts_with guard holds.
            url = url.replacen(strip, "", 1);
        }
    }

    if let Some(prefix) = options.prefix.as_deref().filter(|p| !p.is_empty()) {
        url.insert_str(0, prefix);
    }

    if let Some(rename) = &options.rename {
        url = rename(&url);
    }

    url
}
