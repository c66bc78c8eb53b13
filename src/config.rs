//! Configuration module for the configurator.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.vibconf/settings.toml`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `VC_` and use double underscores
//! to separate nested levels:
//! - `VC_OUTPUT__FORMAT=json` sets `output.format`
//! - `VC_LOGGING__LEVEL=debug` sets `logging.level`
//! - `VC_WIZARD__REQUIRED_FIELDS=[customer,email]` sets `wizard.required_fields`

use crate::error::{ConfiguratorError, ConfiguratorResult};
use crate::io::OutputFormat;
use crate::selection::ProjectField;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the workspace settings
pub const CONFIG_DIR: &str = ".vibconf";

/// Settings file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "settings.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "VC_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Wizard navigation policy
    #[serde(default)]
    pub wizard: WizardConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Default output format when `--json` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Colored terminal output (NO_COLOR still wins)
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WizardConfig {
    /// Project fields that must be filled in before leaving step 1
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<ProjectField>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_required_fields() -> Vec<ProjectField> {
    ProjectField::ALL.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: default_false(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            wizard: WizardConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            required_fields: default_required_fields(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        // Try to find the workspace root by looking for .vibconf directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| Path::new(CONFIG_DIR).join(CONFIG_FILE));
        Self::layered(config_path)
    }

    /// Load configuration from a specific file, still honouring `VC_` overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::layered(path.as_ref().to_path_buf())
    }

    fn layered(config_path: PathBuf) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscore stays
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find the settings file by looking for a .vibconf directory
    /// from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .vibconf is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Render the settings as TOML
    pub fn to_toml(&self) -> ConfiguratorResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfiguratorError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> ConfiguratorResult<()> {
        let path = path.as_ref();
        let toml_string = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfiguratorError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, toml_string).map_err(|source| ConfiguratorError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default settings file in the current directory
    pub fn init_config_file(force: bool) -> ConfiguratorResult<PathBuf> {
        Self::init_config_file_in(Path::new("."), force)
    }

    /// Create a default settings file with helpful comments under `root`
    pub fn init_config_file_in(root: &Path, force: bool) -> ConfiguratorResult<PathBuf> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(ConfiguratorError::ConfigError {
                reason: format!(
                    "{} already exists. Use --force to overwrite",
                    config_path.display()
                ),
            });
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfiguratorError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let required = ProjectField::ALL
            .iter()
            .map(|field| format!("\"{}\"", field.name()))
            .collect::<Vec<_>>()
            .join(", ");

        let template = format!(
            r#"# vibconf configuration file

# Version of the configuration schema
version = 1

# Global debug mode
debug = false

[output]
# Default output format: "text" or "json" (--json always wins)
format = "text"

# Colored terminal output. NO_COLOR in the environment disables it as well
color = true

[logging]
# Log filter used when RUST_LOG is not set (-v forces "debug")
level = "warn"

[wizard]
# Project fields that must be filled in before moving past step 1
required_fields = [{required}]
"#
        );

        std::fs::write(&config_path, template).map_err(|source| {
            ConfiguratorError::FileWrite {
                path: config_path.clone(),
                source,
            }
        })?;

        Ok(config_path)
    }
}
