use std::path::{Path, PathBuf};

use markdown_imagezoom_engine::ZoomSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User-tunable resize behavior, stored as TOML.
///
/// Every field is optional in the file; missing fields fall back to the
/// engine defaults.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Zoom percentage points per pixel of radial pointer movement.
    pub sensitivity: f64,
    /// Lower zoom clamp, percent.
    pub min_zoom: u32,
    /// Upper zoom clamp, percent.
    pub max_zoom: u32,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = ZoomSettings::default();
        Self {
            sensitivity: defaults.sensitivity,
            min_zoom: defaults.min_zoom,
            max_zoom: defaults.max_zoom,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-imagezoom");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Converts into the engine's zoom settings, normalizing inverted clamp
    /// bounds and a non-positive sensitivity back to the defaults.
    pub fn zoom_settings(&self) -> ZoomSettings {
        let defaults = ZoomSettings::default();
        let (min_zoom, max_zoom) = if self.min_zoom <= self.max_zoom && self.min_zoom > 0 {
            (self.min_zoom, self.max_zoom)
        } else {
            (defaults.min_zoom, defaults.max_zoom)
        };
        ZoomSettings {
            sensitivity: if self.sensitivity > 0.0 {
                self.sensitivity
            } else {
                defaults.sensitivity
            },
            min_zoom,
            max_zoom,
        }
    }
}
