//! Command to list discovered configuration sources.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use packrc::config::{ConfigLoader, ConfigSource, EmitFormat};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// List discovered configuration sources in precedence order.
#[derive(Args)]
pub struct SourcesCommand {
    /// Directory to discover project configuration from
    #[arg(long, value_name = "PATH")]
    pub working_dir: Option<PathBuf>,

    /// Output format for the source list
    #[arg(long, value_name = "FORMAT", default_value = "yaml")]
    pub format: EmitFormat,
}

/// One line of the source listing.
#[derive(Serialize)]
struct SourceEntry {
    layer: &'static str,
    precedence: u8,
    path: String,
}

impl SourceEntry {
    fn from_source(source: &ConfigSource) -> Self {
        Self {
            layer: layer_name(source.precedence),
            precedence: source.precedence,
            path: source.path.display().to_string(),
        }
    }
}

impl SourcesCommand {
    /// Execute the sources command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let sources = ConfigLoader::load_all(&working_dir, global.config_dir.as_deref())
            .map_err(|e| CliError::Config(e.to_string()))?;

        match self.format {
            EmitFormat::Json => {
                let entries: Vec<SourceEntry> =
                    sources.iter().map(SourceEntry::from_source).collect();

                let rendered = serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::Config(e.to_string()))?;
                println!("{rendered}");
            }
            EmitFormat::Yaml => {
                println!("built-in  production defaults");

                if sources.is_empty() && !global.quiet {
                    eprintln!("No configuration files found");
                }

                for source in &sources {
                    println!(
                        "{:<9} {}",
                        layer_name(source.precedence),
                        source.path.display()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Human-readable name of a precedence layer.
fn layer_name(precedence: u8) -> &'static str {
    match precedence {
        1 => "user",
        2 => "project",
        _ => "local",
    }
}
