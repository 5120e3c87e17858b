use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;
pub const DEFAULT_LOG_LEVEL: &str = "info";

fn default_double_click_ms() -> u64 {
    DEFAULT_DOUBLE_CLICK_MS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog to open when none is given on the command line.
    #[serde(default)]
    pub data_file: Option<String>,
    /// Filter checkbox names. Empty means one per attribute found in the catalog.
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub filter_labels: HashMap<String, String>,
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            filters: Vec::new(),
            filter_labels: HashMap::new(),
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            log_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = get_config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::parse(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn init() -> io::Result<bool> {
        let path = get_config_path();
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, "")?;
        Ok(true)
    }

    #[must_use]
    pub fn get_data_path(&self) -> Option<PathBuf> {
        self.data_file.as_deref().map(resolve_path)
    }

    #[must_use]
    pub fn get_log_path(&self) -> PathBuf {
        match self.log_file {
            Some(ref file) => resolve_path(file),
            None => get_config_dir().join("bookshelf.log"),
        }
    }

    /// Filter names to offer, falling back to the catalog's own attributes.
    #[must_use]
    pub fn filter_names(&self, catalog_names: Vec<String>) -> Vec<String> {
        if self.filters.is_empty() {
            return catalog_names;
        }
        let mut names: Vec<String> = Vec::with_capacity(self.filters.len());
        for name in &self.filters {
            if !name.is_empty() && !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// Resolve a path to absolute, joining with cwd if relative.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bookshelf")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}
