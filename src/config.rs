use std::path::{Path, PathBuf};

use color_eyre::{Result, eyre::Context};
use serde::{Deserialize, Serialize};

/// Used when neither the CLI, the environment nor the config file names a database.
pub const DEFAULT_DATABASE: &str = "app.sqlite";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file path or `sqlite:` connection URL.
    #[serde(default)]
    database: Option<String>,
    #[serde(default)]
    port: Option<u16>,
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("artist-roster").join("config.toml"))
    }

    /// Load the config at the default location, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write a config file with the default values, unless one already exists.
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| color_eyre::eyre::eyre!("No config directory on this platform"))?;
        if path.exists() {
            log::info!("Config already exists at: {}", path.display());
            return Ok(path);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let defaults = Config {
            database: Some(DEFAULT_DATABASE.to_string()),
            port: Some(DEFAULT_PORT),
        };
        let contents = toml::to_string_pretty(&defaults).context("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .context(format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Expand ~ to home directory
    fn expand_path(path: &str) -> String {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest).to_string_lossy().to_string();
            }
        }
        path.to_string()
    }

    /// The database target, preferring `cli_override` over the file value.
    pub fn database_target(&self, cli_override: Option<&str>) -> String {
        match cli_override.or(self.database.as_deref()) {
            Some(target) if target.starts_with("sqlite:") => target.to_string(),
            Some(target) => Self::expand_path(target),
            None => DEFAULT_DATABASE.to_string(),
        }
    }

    pub fn port(&self, cli_override: Option<u16>) -> u16 {
        cli_override.or(self.port).unwrap_or(DEFAULT_PORT)
    }
}
