//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `compose`: Compose and emit the merged build configuration
//! - `validate`: Validate a configuration file
//! - `sources`: List discovered configuration sources

pub mod compose;
pub mod sources;
pub mod validate;

pub use compose::ComposeCommand;
pub use sources::SourcesCommand;
pub use validate::ValidateCommand;
