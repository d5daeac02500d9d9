//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. Environment variables
//! 2. File given with `--config`
//! 3. `.retouch.toml` in the working directory
//! 4. `~/.config/retouch/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{ENV_PREVIEW_LINES, ENV_PREVIEW_WIDTH, ENV_SUGGEST_CUTOFF};
use crate::env::Env;
use crate::models::{Rule, default_rules};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transform: TransformConfig,
    pub preview: PreviewConfig,
    pub suggest: SuggestConfig,
}

/// Which substitutions run, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub rules: Vec<Rule>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

/// Before/after preview shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Lines shown from each side.
    pub lines: usize,
    /// Characters kept per line before the ellipsis.
    pub width: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { lines: 3, width: 50 }
    }
}

/// "Did you mean" tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Maximum number of suggestions.
    pub limit: usize,
    /// Minimum similarity ratio, `0.0..=1.0`.
    pub cutoff: f64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            cutoff: 0.6,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `workdir` is searched for a local config file; `explicit` must
    /// exist when given.
    pub fn load(workdir: &Path, explicit: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        let local_path = workdir.join(crate::constants::CONFIG_FILENAME);
        if local_path.exists() {
            config.merge(Self::load_file(&local_path)?);
        }

        if let Some(path) = explicit {
            config.merge(Self::load_file(path)?);
        }

        config.apply_env_vars(env);
        tracing::debug!(?config, "configuration loaded");

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other wins for non-default values).
    fn merge(&mut self, other: Config) {
        if other.transform.rules != TransformConfig::default().rules {
            self.transform.rules = other.transform.rules;
        }

        let default_preview = PreviewConfig::default();
        if other.preview.lines != default_preview.lines {
            self.preview.lines = other.preview.lines;
        }
        if other.preview.width != default_preview.width {
            self.preview.width = other.preview.width;
        }

        let default_suggest = SuggestConfig::default();
        if other.suggest.limit != default_suggest.limit {
            self.suggest.limit = other.suggest.limit;
        }
        if other.suggest.cutoff != default_suggest.cutoff {
            self.suggest.cutoff = other.suggest.cutoff;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(lines) = env.parsed(ENV_PREVIEW_LINES) {
            self.preview.lines = lines;
        }
        if let Some(width) = env.parsed(ENV_PREVIEW_WIDTH) {
            self.preview.width = width;
        }
        if let Some(cutoff) = env.parsed::<f64>(ENV_SUGGEST_CUTOFF) {
            if (0.0..=1.0).contains(&cutoff) {
                self.suggest.cutoff = cutoff;
            } else {
                tracing::warn!(variable = ENV_SUGGEST_CUTOFF, cutoff, "cutoff must be within 0.0..=1.0, ignoring");
            }
        }
    }
}
