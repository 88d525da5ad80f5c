//! Configuration system for packrc.
//!
//! This module provides composition of build configuration records from
//! multiple layers:
//! - The built-in production constants table
//! - YAML configuration files (user config and project files)
//! - Environment inputs captured once at process start
//! - Programmatic configuration via the builder
//!
//! # Configuration Precedence
//!
//! Records are merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment inputs (`HOST`, `PORT`, `NODE_ENV`, hot flag)
//! 3. Private project config (`packrc.local.yaml`)
//! 4. Project config (`packrc.yaml`)
//! 5. User config (`~/.packrc/config.yaml`)
//! 6. The built-in production table
//!
//! # Examples
//!
//! Composing two records directly:
//!
//! ```
//! use packrc::config::{BuildConfig, ConfigMerger, OutputConfig};
//!
//! let base = BuildConfig {
//!     output: Some(OutputConfig {
//!         path: Some("/a".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! let overrides = BuildConfig {
//!     output: Some(OutputConfig {
//!         filename: Some("[name].js".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let merged = ConfigMerger::compose(&base, &overrides);
//! let output = merged.output.unwrap();
//! assert_eq!(output.path, Some("/a".into()));
//! assert_eq!(output.filename, Some("[name].js".into()));
//! ```
//!
//! Building the full record without touching files or the environment:
//!
//! ```
//! use packrc::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .build()
//!     .unwrap();
//!
//! assert!(config.output.is_some());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentInputs;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{
    BuildConfig, DevServerConfig, Devtool, EmitFormat, LibraryTarget, Metadata, Mode,
    NodePolyfill, OutputConfig, PluginDescriptor, WatchOptions, DEFAULT_API_PORT, DEFAULT_HOST,
    DEFAULT_PORT,
};
pub use validator::ConfigValidator;
