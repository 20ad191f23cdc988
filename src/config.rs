use crate::error::{PrioError, Result};
use crate::storage::DEFAULT_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names, in lookup order.
pub const CONFIG_FILES: [&str; 2] = [".prio.toml", ".prio.yml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrioConfig {
    #[serde(default)]
    pub prio: PrioSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioSettings {
    /// Project file, relative to the directory holding the config file.
    #[serde(default = "default_file")]
    pub file: String,

    /// Indent the saved JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for PrioSettings {
    fn default() -> Self {
        Self {
            file: default_file(),
            pretty: default_pretty(),
            log_file: None,
        }
    }
}

impl PrioConfig {
    /// Load the config found at or above `start_path`, or the defaults when
    /// there is none. Returns the config and the directory relative paths in
    /// it resolve against.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| PrioError::persistence(config_path, e))?;
        let config = Self::parse(config_path, &content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| PrioError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();

        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    fn parse(config_path: &Path, content: &str) -> Result<Self> {
        match config_path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("yml") | Some("yaml") => Ok(serde_yaml::from_str(content)?),
            _ => Err(PrioError::Config(format!(
                "Unsupported config format: {}",
                config_path.display()
            ))),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            for name in CONFIG_FILES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.prio.file)
    }

    pub fn log_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.prio
            .log_file
            .as_ref()
            .map(|log_file| project_root.join(log_file))
    }
}
