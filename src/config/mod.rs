//! Configuration management
//!
//! Settings live in `~/.teachmaster/config.yaml`. A missing file means
//! defaults; unknown keys in the file are ignored.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::storage::db::default_db_path;

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["database_path", "seed_example_plans", "recent_plans_limit"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file; `None` uses `~/.teachmaster/teachmaster.db`
    pub database_path: Option<PathBuf>,

    /// Seed an example lesson plan when no plans are stored yet
    pub seed_example_plans: bool,

    /// Number of recent lesson plans shown on the dashboard
    pub recent_plans_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            seed_example_plans: true,
            recent_plans_limit: 5,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A config file that cannot be read or parsed is reported and replaced
    /// by defaults, so `config set` can still repair it.
    pub fn load() -> Result<Self> {
        Ok(Self::load_or_default(&Self::config_path()?))
    }

    /// Like [`Config::load_from`], but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("{e:#}; using default settings");
            Self::default()
        })
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&contents)
            .map_err(|e| anyhow!("Failed to parse config file at {}: {e}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        }

        let contents = serde_saphyr::to_string(self)
            .map_err(|e| anyhow!("Failed to serialize config: {e}"))?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file at {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .join(".teachmaster");

        Ok(config_dir.join("config.yaml"))
    }

    /// The database file to use, honoring `database_path`.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => default_db_path(),
        }
    }

    /// Reads a setting as a display string.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "database_path" => self
                .database_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "seed_example_plans" => self.seed_example_plans.to_string(),
            "recent_plans_limit" => self.recent_plans_limit.to_string(),
            _ => bail!(unknown_key(key)),
        };
        Ok(value)
    }

    /// Updates a setting from its string form. An empty `database_path`
    /// resets it to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database_path" => {
                let value = value.trim();
                self.database_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "seed_example_plans" => {
                self.seed_example_plans = parse_bool(value)
                    .with_context(|| format!("Invalid value for {key}: '{value}'"))?;
            }
            "recent_plans_limit" => {
                self.recent_plans_limit = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid value for {key}: '{value}'"))?;
            }
            _ => bail!(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", "))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => bail!("expected true or false"),
    }
}
