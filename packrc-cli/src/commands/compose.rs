//! Command to compose and emit the merged build configuration.

use crate::error::CliError;
use crate::utils::{write_output, GlobalOptions};
use clap::Args;
use packrc::config::{ConfigBuilder, ConfigValidator, EmitFormat};
use std::path::PathBuf;

/// Compose the build configuration and emit the merged record.
#[derive(Args)]
pub struct ComposeCommand {
    /// Mark hot module reload as requested
    #[arg(long)]
    pub hot: bool,

    /// Output format for the emitted record
    #[arg(long, value_name = "FORMAT", default_value = "json")]
    pub format: EmitFormat,

    /// Write the record to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip loading configuration files
    #[arg(long)]
    pub skip_files: bool,

    /// Skip reading environment inputs
    #[arg(long)]
    pub skip_env: bool,

    /// Directory to discover project configuration from
    #[arg(long, value_name = "PATH")]
    pub working_dir: Option<PathBuf>,

    /// Validate the composed record before emitting
    #[arg(long)]
    pub check: bool,
}

impl ComposeCommand {
    /// Execute the compose command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = ConfigBuilder::new().hot(self.hot);

        if let Some(ref dir) = self.working_dir {
            builder = builder.with_working_dir(dir);
        }
        if let Some(ref dir) = global.config_dir {
            builder = builder.with_config_dir(dir);
        }
        if self.skip_files {
            builder = builder.skip_files();
        }
        if self.skip_env {
            builder = builder.skip_env();
        }

        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let logger = packrc::init_logger(global.verbose, global.quiet);
        logger.info(&format!(
            "composed configuration with {} plugin(s)",
            config.plugins.as_ref().map_or(0, Vec::len)
        ));

        if self.check {
            if let Err(e) = ConfigValidator::validate(&config) {
                eprintln!("Validation error: {e}");
                return Err(CliError::SemanticFailure(
                    "Composed configuration is invalid".to_string(),
                ));
            }
        }

        let rendered = match self.format {
            EmitFormat::Json => config.to_json_pretty(),
            EmitFormat::Yaml => config.to_yaml(),
        }
        .map_err(CliError::from)?;

        write_output(self.output.as_deref(), &rendered)
    }
}
