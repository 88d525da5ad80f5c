//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ComposeCommand, SourcesCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for composing bundler build configurations.
#[derive(Parser)]
#[command(name = "packrc")]
#[command(version, about = "Compose bundler build configurations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "PACKRC_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Compose and emit the merged build configuration
    Compose(ComposeCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// List discovered configuration sources in precedence order
    Sources(SourcesCommand),
}
