//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `FETCHREV__SECTION__KEY` (e.g. `FETCHREV__DEFAULTS__VCS=hg`)
//! 3. Config file (`--config` or [`AppConfig::config_path`]; optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use fetchrev_core::domain::VcsKind;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "FETCHREV";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Values used when a flag is omitted.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub vcs: String,
    pub root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                vcs: VcsKind::Git.as_str().into(),
                root: PathBuf::from("."),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// `config_file` is the path given via `--config`; `None` means the
    /// default location. A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::layered(&path, Environment::with_prefix(ENV_PREFIX))
    }

    fn layered(path: &Path, env: Environment) -> anyhow::Result<Self> {
        let built = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.separator("__").try_parsing(true))
            .build()?;

        Ok(built.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fetchrev.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "fetchrev", "fetchrev")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fetchrev.toml"))
    }

    /// The configured default VCS kind.
    pub fn default_vcs(&self) -> CliResult<VcsKind> {
        self.defaults
            .vcs
            .parse()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.vcs: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Look up a dotted key such as `defaults.vcs`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let tree = serde_json::to_value(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;

        let pointer = format!("/{}", key.replace('.', "/"));
        match tree.pointer(&pointer) {
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(value) if !value.is_object() => Ok(value.to_string()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }
}
