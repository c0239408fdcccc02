use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Name of the generated module file
pub const OUTPUT_FILE_NAME: &str = "requests.js";

/// The single file produced by one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub path: PathBuf,
    pub contents: String,
}

impl OutputArtifact {
    pub(crate) fn new(contents: String) -> Self {
        Self {
            path: PathBuf::from(OUTPUT_FILE_NAME),
            contents,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.contents
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    /// Number of `cache.put` statements in the module
    pub fn put_count(&self) -> usize {
        self.as_str()
            .lines()
            .filter(|line| line.starts_with("  cache.put('"))
            .count()
    }

    /// Write the artifact into `dir`, returning the full path written
    pub fn write_into(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let target = dir.join(&self.path);
        std::fs::write(&target, self.as_bytes())?;
        Ok(target)
    }
}
