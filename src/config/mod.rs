use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    #[allow(dead_code)]
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .mlhubrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.parse::<usize>().ok())
    }

    /// Hub root holding the three category directories.
    pub fn base_dir(&self) -> PathBuf {
        self.get("HUB_BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Metadata file path; defaults to metadata.json under the hub root.
    pub fn metadata_path(&self) -> PathBuf {
        self.get("METADATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.base_dir().join("metadata.json"))
    }

    pub fn download_path(&self) -> PathBuf {
        self.get("DOWNLOAD_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("mlhub"))
    }

    pub fn notebook_timeout_secs(&self) -> u64 {
        self.get_u64("NOTEBOOK_TIMEOUT").unwrap_or(600)
    }

    pub fn notebook_kernel(&self) -> String {
        self.get("NOTEBOOK_KERNEL").unwrap_or_else(|| "python3".into())
    }

    pub fn preview_rows(&self) -> usize {
        self.get_usize("PREVIEW_ROWS").unwrap_or(10)
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or MLHUB_* for forward-compat
    const KEYS: &[&str] = &[
        "HUB_BASE_DIR",
        "METADATA_PATH",
        "DOWNLOAD_PATH",
        "NOTEBOOK_TIMEOUT",
        "NOTEBOOK_KERNEL",
        "PREVIEW_ROWS",
        "PRETTIFY_MARKDOWN",
        "DEFAULT_COLOR",
    ];

    KEYS.contains(&k) || k.starts_with("MLHUB_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("mlhub").join(".mlhubrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    let downloads = BaseDirs::new()
        .map(|b| b.home_dir().join("Downloads"))
        .unwrap_or_else(|| env::temp_dir().join("mlhub"));
    m.insert(
        "DOWNLOAD_PATH".into(),
        downloads.to_string_lossy().into_owned(),
    );

    // Numbers
    m.insert("NOTEBOOK_TIMEOUT".into(), "600".into());
    m.insert("PREVIEW_ROWS".into(), "10".into());

    // Strings
    m.insert("NOTEBOOK_KERNEL".into(), "python3".into());
    m.insert("DEFAULT_COLOR".into(), "cyan".into());

    // Bools as strings
    m.insert("PRETTIFY_MARKDOWN".into(), "true".into());

    m
}
