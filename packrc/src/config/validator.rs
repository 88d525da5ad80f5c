//! Configuration validation.
//!
//! Structural checks over a build configuration record. Validation is a
//! separate, explicit operation: composition itself is permissive and never
//! validates, so a record is only checked when the caller asks.

use crate::config::schema::{BuildConfig, DevServerConfig, OutputConfig};
use crate::error::{Error, Result};
use crate::template::FilenameTemplate;

/// Validates build configuration records.
///
/// # Examples
///
/// ```
/// use packrc::config::{BuildConfig, ConfigValidator};
///
/// ConfigValidator::validate(&BuildConfig::production()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &BuildConfig) -> Result<()> {
        if let Some(ref output) = config.output {
            Self::validate_output(output)?;
        }

        if let Some(ref dev_server) = config.dev_server {
            Self::validate_dev_server(dev_server)?;
        }

        if let Some(ref node) = config.node {
            for category in node.keys() {
                Self::validate_identifier("node", category)?;
            }
        }

        if let Some(ref metadata) = config.metadata {
            if metadata.port == Some(0) {
                return Err(Error::Validation {
                    field: "metadata.port".into(),
                    message: "Port must be greater than 0".into(),
                });
            }
            if metadata.api_port == Some(0) {
                return Err(Error::Validation {
                    field: "metadata.apiPort".into(),
                    message: "Port must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate output options.
    ///
    /// Filenames live inside the output directory, so the templates must be
    /// relative. Chunk filenames name many files and must carry a
    /// distinguishing placeholder token.
    fn validate_output(output: &OutputConfig) -> Result<()> {
        if let Some(ref filename) = output.filename {
            Self::validate_template("output.filename", filename)?;
        }

        if let Some(ref source_map) = output.source_map_filename {
            Self::validate_template("output.sourceMapFilename", source_map)?;
        }

        if let Some(ref chunk) = output.chunk_filename {
            Self::validate_template("output.chunkFilename", chunk)?;
            if chunk.is_static() {
                return Err(Error::Validation {
                    field: "output.chunkFilename".into(),
                    message: "Chunk filenames must carry a placeholder such as [id]".into(),
                });
            }
        }

        if let Some(ref library) = output.library {
            Self::validate_identifier("output.library", library.pattern())?;
        }

        Ok(())
    }

    /// Validate dev server settings.
    fn validate_dev_server(dev_server: &DevServerConfig) -> Result<()> {
        if dev_server.port == Some(0) {
            return Err(Error::Validation {
                field: "devServer.port".into(),
                message: "Port must be greater than 0".into(),
            });
        }

        if let Some(ref host) = dev_server.host {
            Self::validate_identifier("devServer.host", host)?;
        }

        Ok(())
    }

    /// Validate a filename template.
    fn validate_template(field: &str, template: &FilenameTemplate) -> Result<()> {
        let pattern = template.pattern();

        if pattern.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if pattern.starts_with('/') || pattern.starts_with('\\') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must be a relative path inside the output directory".into(),
            });
        }

        Ok(())
    }

    /// Validate string identifiers (hosts, library names, polyfill names).
    ///
    /// Checks that the identifier is non-empty after trimming, contains no
    /// null bytes, and is not longer than 255 characters.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }

        Ok(())
    }
}
