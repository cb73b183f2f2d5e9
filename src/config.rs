// src/config.rs

use crate::types::Config;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::level_filters::LevelFilter;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

impl Config {
    /// Read and validate a YAML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse and validate a config held in memory.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Pick the config to run with: an explicit path, else `config.yaml`
    /// if present, else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_with_fallback(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Same as [`Config::resolve`] with the fallback file given.
    ///
    /// An explicit path that cannot be loaded is an error; it never falls
    /// through to the fallback or the defaults.
    pub fn resolve_with_fallback(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if fallback.exists() {
            return Self::load(fallback);
        }
        Ok(Config::default())
    }

    fn validate(&self) -> Result<()> {
        self.logging
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid logging level '{}'", self.logging.level))?;

        if self.lines.0.is_empty() {
            bail!("at least one line must be configured");
        }
        let mut seen = HashSet::new();
        for name in &self.lines.0 {
            if name.trim().is_empty() {
                bail!("line names must not be blank");
            }
            if !seen.insert(name.as_str()) {
                bail!("duplicate line name '{}'", name);
            }
        }
        Ok(())
    }
}
