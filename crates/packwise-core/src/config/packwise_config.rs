//! Top-level Packwise configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AllocatorConfig, PacksConfig, TableStrategy};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PACKWISE_*`)
/// 3. Project config (`packwise.toml` in project root)
/// 4. User config (`~/.packwise/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PackwiseConfig {
    pub packs: PacksConfig,
    pub allocator: AllocatorConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub pack_sizes: Option<Vec<u64>>,
    pub max_target: Option<u64>,
    pub table_strategy: Option<TableStrategy>,
}

impl PackwiseConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal; keep defaults.
                        ::tracing::warn!(error = %e, "ignoring user config");
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

        ::tracing::debug!(
            max_target = config.allocator.effective_max_target(),
            table_strategy = %config.allocator.effective_table_strategy(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PackwiseConfig) -> Result<(), ConfigError> {
        if let Some(ref sizes) = config.packs.default_sizes {
            if sizes.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "packs.default_sizes".to_string(),
                    message: "cannot be empty".to_string(),
                });
            }
            if sizes.contains(&0) {
                return Err(ConfigError::ValidationFailed {
                    field: "packs.default_sizes".to_string(),
                    message: "pack sizes must be positive".to_string(),
                });
            }
        }
        if config.allocator.max_target == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "allocator.max_target".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.allocator.dense_table_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "allocator.dense_table_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.packwise/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PackwiseConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PackwiseConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut PackwiseConfig, other: &PackwiseConfig) {
        if other.packs.default_sizes.is_some() {
            base.packs.default_sizes = other.packs.default_sizes.clone();
        }
        if other.allocator.max_target.is_some() {
            base.allocator.max_target = other.allocator.max_target;
        }
        if other.allocator.table_strategy.is_some() {
            base.allocator.table_strategy = other.allocator.table_strategy;
        }
        if other.allocator.dense_table_limit.is_some() {
            base.allocator.dense_table_limit = other.allocator.dense_table_limit;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PACKWISE_PACK_SIZES=250,500`, `PACKWISE_MAX_TARGET=1000000`, etc.
    fn apply_env_overrides(config: &mut PackwiseConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("PACKWISE_PACK_SIZES") {
            config.packs.default_sizes = Some(parse_size_list("PACKWISE_PACK_SIZES", &val)?);
        }
        if let Ok(val) = std::env::var("PACKWISE_MAX_TARGET") {
            if let Ok(v) = val.parse::<u64>() {
                config.allocator.max_target = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PACKWISE_TABLE_STRATEGY") {
            let strategy = val.parse::<TableStrategy>().map_err(|message| {
                ConfigError::InvalidValue {
                    field: "PACKWISE_TABLE_STRATEGY".to_string(),
                    message,
                }
            })?;
            config.allocator.table_strategy = Some(strategy);
        }
        if let Ok(val) = std::env::var("PACKWISE_DENSE_TABLE_LIMIT") {
            if let Ok(v) = val.parse::<u64>() {
                config.allocator.dense_table_limit = Some(v);
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PackwiseConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.pack_sizes {
            config.packs.default_sizes = Some(v.clone());
        }
        if let Some(v) = cli.max_target {
            config.allocator.max_target = Some(v);
        }
        if let Some(v) = cli.table_strategy {
            config.allocator.table_strategy = Some(v);
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

/// Parse a comma-separated list of pack sizes, e.g. `"250, 500,1000"`.
fn parse_size_list(field: &str, raw: &str) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("'{s}': {e}"),
            })
        })
        .collect()
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_list() {
        assert_eq!(parse_size_list("x", "250, 500,1000").unwrap(), vec![250, 500, 1000]);
        assert_eq!(parse_size_list("x", "").unwrap(), Vec::<u64>::new());
        assert!(matches!(
            parse_size_list("x", "250,abc"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_merge_prefers_other_values() {
        let mut base = PackwiseConfig::default();
        base.allocator.max_target = Some(10);
        let other = PackwiseConfig {
            packs: PacksConfig {
                default_sizes: Some(vec![7]),
            },
            allocator: AllocatorConfig::default(),
        };
        PackwiseConfig::merge(&mut base, &other);
        assert_eq!(base.packs.default_sizes, Some(vec![7]));
        assert_eq!(base.allocator.max_target, Some(10));
    }
}
