//! Algorithm description lookup loaded from metadata.json.

use std::{collections::HashMap, fs, path::Path};

pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Read-only filename -> description mapping, loaded once at startup.
///
/// A missing or malformed metadata file degrades to an empty mapping with
/// no error surfaced anywhere; lookups then fall back to the default text.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    inner: HashMap<String, String>,
}

impl Metadata {
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let inner = fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str::<HashMap<String, String>>(&text).ok())
            .unwrap_or_default();
        Self { inner }
    }

    pub fn describe(&self, filename: &str) -> &str {
        self.inner
            .get(filename)
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_mapping() {
        let md = Metadata::load(Path::new("/nonexistent/metadata.json"));
        assert!(md.is_empty());
        assert_eq!(md.describe("anything.py"), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn absent_key_uses_default_text() {
        let md = Metadata::default();
        assert_eq!(md.describe("kmeans.py"), "No description available.");
    }
}
