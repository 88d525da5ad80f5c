#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # packrc
//!
//! A library for composing bundler build configurations.
//!
//! This library assembles the configuration record handed to an external
//! JavaScript bundler: it layers a built-in production constants table,
//! discovered configuration files, and once-captured environment inputs,
//! deep-merging them with last-writer-wins semantics per key and
//! concatenation for plugin lists.
//!
//! ## Core Types
//!
//! - [`BuildConfig`] and [`config::OutputConfig`]: the configuration record
//! - [`config::ConfigMerger`]: the composition operation
//! - [`config::EnvironmentInputs`]: explicit environment capture
//! - [`FilenameTemplate`]: output filename patterns with `[name]`/`[id]` tokens
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use packrc::config::{BuildConfig, ConfigMerger, PluginDescriptor};
//!
//! let base = BuildConfig {
//!     plugins: Some(vec![PluginDescriptor::NamedModules]),
//!     ..Default::default()
//! };
//! let overrides = BuildConfig {
//!     plugins: Some(vec![PluginDescriptor::LoaderOptions {
//!         debug: true,
//!         options: Default::default(),
//!     }]),
//!     ..Default::default()
//! };
//!
//! // Plugin lists accumulate in order.
//! let merged = ConfigMerger::compose(&base, &overrides);
//! assert_eq!(merged.plugins.unwrap().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod template;
pub mod value;

// Re-export key types at crate root for convenience
pub use config::{BuildConfig, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use template::FilenameTemplate;
