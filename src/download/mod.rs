//! Raw-bytes download adapter, independent of render outcome.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const MIME_TYPE: &str = "application/octet-stream";

/// Offers the selected file's bytes under its original filename. Always
/// available once a file is selected, whatever the renderer did with it.
#[derive(Debug, Clone)]
pub struct Download {
    path: PathBuf,
    filename: String,
}

impl Download {
    pub fn new(path: PathBuf, filename: &str) -> Self {
        Self {
            path,
            filename: filename.to_string(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Whole-file binary read, no transformation.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path)
            .with_context(|| format!("Failed to read '{}'", self.path.display()))
    }

    /// Write a byte-identical copy into `dir` under the original filename.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create '{}'", dir.display()))?;
        let target = dir.join(&self.filename);
        fs::write(&target, self.bytes()?)
            .with_context(|| format!("Failed to write '{}'", target.display()))?;
        Ok(target)
    }
}
