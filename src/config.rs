//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treedist/treedist.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `TREEDIST_*` prefix (`__` for nested keys)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::render::OutputStyle;
use crate::application::ApplicationError;

/// Largest tree accepted by default, same as the original interactive tool.
pub const DEFAULT_MAX_NODES: usize = 30_000;

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    /// Format of the distance-sum line(s)
    pub style: OutputStyle,
}

/// Raw output settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputSettings {
    pub style: Option<OutputStyle>,
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_nodes: Option<usize>,
    pub verify: Option<bool>,
    pub render_limit: Option<usize>,
    pub output: RawOutputSettings,
}

/// Unified configuration for treedist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Largest accepted node count (default: 30000)
    pub max_nodes: usize,
    /// Check the edge identity after every solve
    pub verify: bool,
    /// Largest tree the `tree` command will draw
    pub render_limit: usize,
    pub output: OutputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            verify: false,
            render_limit: 200,
            output: OutputSettings::default(),
        }
    }
}

/// Get the XDG config directory for treedist.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treedist").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treedist.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_nodes: overlay.max_nodes.unwrap_or(self.max_nodes),
            verify: overlay.verify.unwrap_or(self.verify),
            render_limit: overlay.render_limit.unwrap_or(self.render_limit),
            output: OutputSettings {
                style: overlay.output.style.unwrap_or(self.output.style),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; unlike the global file it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), explicit, None)
    }

    /// Layered load with every source supplied by the caller.
    ///
    /// A missing `global` file is skipped; `env` replaces the process
    /// environment when given.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global.filter(|p| p.exists()) {
            debug!("global config: {}", global_path.display());
            current = current.merge_with(&load_raw_settings(global_path)?);
        }

        if let Some(path) = explicit {
            debug!("explicit config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides_from(current, env)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply TREEDIST_* variables as explicit overrides, reading from
    /// `source` instead of the process environment when given.
    pub fn apply_env_overrides_from(
        mut settings: Self,
        source: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREEDIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<usize>(&config, "max_nodes")? {
            settings.max_nodes = val;
        }
        if let Some(val) = env_value::<bool>(&config, "verify")? {
            settings.verify = val;
        }
        if let Some(val) = env_value::<usize>(&config, "render_limit")? {
            settings.render_limit = val;
        }
        if let Some(val) = env_value::<String>(&config, "output.style")? {
            settings.output.style = parse_style(&val)?;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_nodes == 0 {
            return Err(ApplicationError::Config {
                message: "max_nodes must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        format!(
            r#"# treedist configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/treedist/treedist.toml
#   Explicit: treedist --config <file>
#   Env:      TREEDIST_* environment variables (e.g. TREEDIST_OUTPUT__STYLE=table)

# Largest accepted node count
# max_nodes = {DEFAULT_MAX_NODES}

# Check the edge identity after every solve
# verify = false

# Largest tree the `tree` command will draw
# render_limit = 200

[output]
# plain | list | table
# style = "plain"
"#
        )
    }
}

fn parse_style(value: &str) -> Result<OutputStyle, ApplicationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "plain" => Ok(OutputStyle::Plain),
        "list" => Ok(OutputStyle::List),
        "table" => Ok(OutputStyle::Table),
        other => Err(ApplicationError::Config {
            message: format!("unknown output style {other:?} (plain, list, table)"),
        }),
    }
}

/// Unset keys are `None`; values of the wrong type are errors.
fn env_value<T: DeserializeOwned>(
    config: &Config,
    key: &str,
) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => {
            let var = format!("TREEDIST_{}", key.replace('.', "__").to_ascii_uppercase());
            Err(ApplicationError::Config {
                message: format!("{var}: {e}"),
            })
        }
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
