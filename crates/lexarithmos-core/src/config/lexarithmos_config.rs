//! Top-level Lexarithmos configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{IndexConfig, StorageConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LEXARITHMOS_*`)
/// 3. Project config (`lexarithmos.toml` in project root)
/// 4. User config (`~/.lexarithmos/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexarithmosConfig {
    pub storage: StorageConfig,
    pub indexes: IndexConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<String>,
    pub registry_file: Option<String>,
    pub auto_refresh: Option<bool>,
}

impl LexarithmosConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &LexarithmosConfig) -> Result<(), ConfigError> {
        let names = [
            ("storage.data_dir", &config.storage.data_dir),
            ("storage.registry_file", &config.storage.registry_file),
            ("storage.permutations_file", &config.storage.permutations_file),
            ("storage.variations_file", &config.storage.variations_file),
        ];
        for (field, value) in names {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        let storage = &config.storage;
        let files = [
            storage.effective_registry_file(),
            storage.effective_permutations_file(),
            storage.effective_variations_file(),
        ];
        if files[0] == files[1] || files[0] == files[2] || files[1] == files[2] {
            return Err(ConfigError::ValidationFailed {
                field: "storage".to_string(),
                message: "registry, permutation, and variation files must differ".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.lexarithmos/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LexarithmosConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LexarithmosConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut LexarithmosConfig, other: &LexarithmosConfig) {
        // Storage
        if other.storage.data_dir.is_some() {
            base.storage.data_dir = other.storage.data_dir.clone();
        }
        if other.storage.registry_file.is_some() {
            base.storage.registry_file = other.storage.registry_file.clone();
        }
        if other.storage.permutations_file.is_some() {
            base.storage.permutations_file = other.storage.permutations_file.clone();
        }
        if other.storage.variations_file.is_some() {
            base.storage.variations_file = other.storage.variations_file.clone();
        }

        // Indexes
        if other.indexes.auto_refresh.is_some() {
            base.indexes.auto_refresh = other.indexes.auto_refresh;
        }
        if other.indexes.permutations.is_some() {
            base.indexes.permutations = other.indexes.permutations;
        }
        if other.indexes.variations.is_some() {
            base.indexes.variations = other.indexes.variations;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LEXARITHMOS_DATA_DIR`, `LEXARITHMOS_AUTO_REFRESH`, etc.
    fn apply_env_overrides(config: &mut LexarithmosConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("LEXARITHMOS_DATA_DIR") {
            config.storage.data_dir = Some(val);
        }
        if let Ok(val) = std::env::var("LEXARITHMOS_REGISTRY_FILE") {
            config.storage.registry_file = Some(val);
        }
        if let Ok(val) = std::env::var("LEXARITHMOS_PERMUTATIONS_FILE") {
            config.storage.permutations_file = Some(val);
        }
        if let Ok(val) = std::env::var("LEXARITHMOS_VARIATIONS_FILE") {
            config.storage.variations_file = Some(val);
        }
        if let Ok(val) = std::env::var("LEXARITHMOS_AUTO_REFRESH") {
            let v = val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                field: "LEXARITHMOS_AUTO_REFRESH".to_string(),
                message: format!("expected true or false, got '{val}'"),
            })?;
            config.indexes.auto_refresh = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut LexarithmosConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.data_dir {
            config.storage.data_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.registry_file {
            config.storage.registry_file = Some(v.clone());
        }
        if let Some(v) = cli.auto_refresh {
            config.indexes.auto_refresh = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.lexarithmos/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".lexarithmos"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
