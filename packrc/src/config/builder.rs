//! Configuration builder.
//!
//! Assembles the final build configuration from its layers: the built-in
//! production constants table, discovered configuration files, captured
//! environment inputs, and programmatic overrides, in that precedence
//! order (lowest to highest).

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentInputs;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{BuildConfig, PluginDescriptor};
use crate::error::Result;

/// Builder for composed build configurations.
///
/// # Examples
///
/// Compose without touching files or the process environment:
///
/// ```
/// use packrc::config::{BuildConfig, ConfigBuilder, Devtool};
///
/// let custom = BuildConfig {
///     devtool: Some(Devtool::InlineSourceMap),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.devtool, Some(Devtool::InlineSourceMap));
/// ```
///
/// Loading from a specific directory:
///
/// ```no_run
/// use packrc::config::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_working_dir(Path::new("/path/to/project"))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    hot: bool,
    env: Option<EnvironmentInputs>,
    overrides: Option<BuildConfig>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory to discover project configuration files from.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Override where the user configuration file is loaded from.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Skip loading configuration files entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip capturing environment inputs.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Mark hot module reload as requested.
    #[must_use]
    pub fn hot(mut self, hot: bool) -> Self {
        self.hot = hot;
        self
    }

    /// Use pre-captured environment inputs instead of reading the process
    /// environment.
    #[must_use]
    pub fn with_env(mut self, inputs: EnvironmentInputs) -> Self {
        self.env = Some(inputs);
        self
    }

    /// Apply a programmatic configuration with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build the composed configuration.
    ///
    /// Layers are merged lowest to highest precedence: the built-in
    /// production constants table, the user configuration file, project
    /// `packrc.yaml` and `packrc.local.yaml` files, environment inputs,
    /// and finally any programmatic overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// or if environment capture fails.
    pub fn build(self) -> Result<BuildConfig> {
        let mut result = BuildConfig::production();

        if !self.skip_files {
            let working_dir = match &self.working_dir {
                Some(dir) => dir.clone(),
                None => env::current_dir()?,
            };

            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in sources {
                ConfigMerger::merge_into(&mut result, &source.config);
            }
        }

        match self.env {
            Some(inputs) => inputs.apply_overrides(&mut result),
            None if !self.skip_env => {
                EnvironmentInputs::capture(self.hot)?.apply_overrides(&mut result);
            }
            None => {}
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut result, overrides);
        }

        // The built-in constant-injection plugin is derived from the
        // constants table; rebuild it from the final merged table so the
        // injected values match what the record reports. The built-in
        // descriptor is always the first define entry; later ones belong to
        // callers and are left alone.
        if let Some(ref metadata) = result.metadata {
            if let Some(plugins) = result.plugins.as_mut() {
                if let Some(slot) = plugins
                    .iter_mut()
                    .find(|p| matches!(p, PluginDescriptor::Define { .. }))
                {
                    *slot = metadata.define_plugin();
                }
            }
        }

        Ok(result)
    }
}
