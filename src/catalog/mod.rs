//! Resource categories and directory listing.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::ValueEnum;

/// Fixed resource classification; each variant owns one directory under the
/// hub root and selects one render strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Algorithms,
    Datasets,
    Notes,
}

pub const ALL_CATEGORIES: [Category; 3] =
    [Category::Algorithms, Category::Datasets, Category::Notes];

impl Category {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Algorithms => "Algorithms",
            Category::Datasets => "Datasets",
            Category::Notes => "Notes",
        }
    }

    pub fn label(&self) -> &'static str {
        self.dir_name()
    }
}

/// Explicitly constructed hub configuration: resolves category directories
/// and file paths relative to one base directory.
#[derive(Debug, Clone)]
pub struct Library {
    base_dir: PathBuf,
}

impl Library {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.base_dir.join(category.dir_name())
    }

    pub fn file_path(&self, category: Category, filename: &str) -> PathBuf {
        self.category_dir(category).join(filename)
    }

    /// List selectable files for a category, optionally filtered by a
    /// case-insensitive substring match on the filename.
    ///
    /// Filesystem-native order, never sorted; callers must not rely on it.
    /// A missing category directory is a visible failure: the caller gets
    /// an Err to report, unlike the silent metadata fallback.
    pub fn list(&self, category: Category, search: Option<&str>) -> Result<Vec<String>> {
        let dir = self.category_dir(category);
        if !dir.exists() {
            bail!("Folder not found: {}", dir.display());
        }

        let mut files: Vec<String> = fs::read_dir(&dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().to_str().map(|s| s.to_string()))
            .collect();

        if let Some(term) = search {
            let term = term.to_lowercase();
            if !term.is_empty() {
                files.retain(|f| f.to_lowercase().contains(&term));
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dir_is_an_error() {
        let lib = Library::new(PathBuf::from("/nonexistent/hub"));
        let err = lib.list(Category::Datasets, None).unwrap_err();
        assert!(err.to_string().contains("Folder not found"));
    }

    #[test]
    fn dir_names_are_fixed() {
        assert_eq!(Category::Algorithms.dir_name(), "Algorithms");
        assert_eq!(Category::Datasets.dir_name(), "Datasets");
        assert_eq!(Category::Notes.dir_name(), "Notes");
    }
}
