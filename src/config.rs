// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Backing file override; defaults to `<data dir>/okuke.txt`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_to_file: bool,
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            // Match the serde defaults
            log_level: default_log_level(),
            log_to_file: false,
            show_banner: true,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Whether an error from `load` only means there is no config file yet.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Defaults when the file is absent or broken. Failures other than a
    /// missing file come back alongside, to be reported once logging is up.
    pub fn load_or_default(ctx: &dyn AppContext) -> (Self, Option<Error>) {
        match Self::load(ctx) {
            Ok(config) => (config, None),
            Err(e) if Self::is_missing_config_error(&e) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }

    /// Path of the backing task file: the configured override or the context default.
    pub fn resolve_data_file(&self, ctx: &dyn AppContext) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => ctx.get_task_file_path(),
        }
    }
}
