use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use directories::ProjectDirs;

/// Current-conditions endpoint; the forecast endpoint hangs off it.
pub const DEFAULT_API_BASE: &str = "https://api.openweathermap.org/data/2.5/weather";

const ENV_API_BASE: &str = "SKYCAST_API_BASE";
const ENV_API_KEY: &str = "SKYCAST_API_KEY";

/// Top-level configuration stored on disk, with environment overrides.
///
/// Both values are opaque strings and must never be logged.
///
/// Example TOML:
/// ```toml
/// api_base = "https://api.openweathermap.org/data/2.5/weather"
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk (empty default if the file doesn't exist yet),
    /// then let `SKYCAST_API_BASE` / `SKYCAST_API_KEY` override it.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.overlay(
            env::var(ENV_API_BASE).ok(),
            env::var(ENV_API_KEY).ok(),
        );
        Ok(cfg)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Non-empty override values win over whatever the file held.
    fn overlay(&mut self, api_base: Option<String>, api_key: Option<String>) {
        if let Some(base) = api_base.filter(|v| !v.is_empty()) {
            self.api_base = Some(base);
        }
        if let Some(key) = api_key.filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Effective endpoint base: configured value or the OpenWeather default.
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your OpenWeather API key,\n\
                 or set the {ENV_API_KEY} environment variable."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_api_base(&mut self, api_base: String) {
        self.api_base = Some(api_base);
    }

    pub fn is_configured(&self) -> bool {
        self.require_api_key().is_ok()
    }
}
