//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading packrc configuration files
//! from various locations with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::BuildConfig;
use crate::error::{Error, Result};

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use packrc::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.packrc/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: BuildConfig,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use packrc::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.packrc/config.yaml` (precedence 1)
    /// 2. Project `packrc.yaml` files walking up from `working_dir` (precedence 2)
    /// 3. Project `packrc.local.yaml` files (precedence 3)
    ///
    /// The `config_dir` parameter allows overriding where the user config is
    /// loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        // Load user config (~/.packrc/config.yaml or custom config dir)
        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        // Walk up directory tree looking for packrc.yaml/packrc.local.yaml
        let project_configs = Self::discover_project_configs(working_dir)?;
        sources.extend(project_configs);

        // Sort by precedence (higher precedence last for easier processing)
        sources.sort_by_key(|s| s.precedence);

        log::debug!("loaded {} configuration source(s)", sources.len());

        Ok(sources)
    }

    /// Load user configuration file.
    ///
    /// If `config_dir` is provided, loads from `{config_dir}/config.yaml`.
    /// Otherwise uses `~/.packrc/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1, // Lowest precedence
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either packrc.yaml or
    /// packrc.local.yaml.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            let mut found_any = false;

            // Check for packrc.yaml
            let project_file = current.join("packrc.yaml");
            if project_file.exists() {
                let config = Self::load_file(&project_file)?;
                log::debug!("found project config at {}", project_file.display());
                configs.push(ConfigSource {
                    path: project_file,
                    precedence: 2,
                    config,
                });
                found_any = true;
            }

            // Check for packrc.local.yaml (higher precedence)
            let local_file = current.join("packrc.local.yaml");
            if local_file.exists() {
                let config = Self::load_file(&local_file)?;
                log::debug!("found local config at {}", local_file.display());
                configs.push(ConfigSource {
                    path: local_file,
                    precedence: 3,
                    config,
                });
                found_any = true;
            }

            // Stop if we found configs or can't go up anymore
            if found_any || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<BuildConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Get the default user config file path, if a home directory exists.
    fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|dir| dir.join(".packrc").join("config.yaml"))
    }
}
