//! View configuration service: locates and loads `view.json`.

use crate::core::Result;
use crate::kernel::services::ports::config::ViewConfig;
use std::path::{Path, PathBuf};

use super::paths::get_cache_dir;

const CONFIG_DIR: &str = ".zview";
const CONFIG_FILE: &str = "view.json";

pub fn get_config_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn ensure_config_file() -> std::io::Result<PathBuf> {
    let path = get_config_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine config directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&ViewConfig::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

pub fn load_config() -> Option<ViewConfig> {
    let path = get_config_path()?;
    let data = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(error = %e, "invalid view config, using defaults");
            None
        }
    }
}

pub struct ConfigService {
    config: ViewConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config: ViewConfig::default(),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
