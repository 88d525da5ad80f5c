//! Environment input capture.
//!
//! The build reads `HOST`, `PORT`, the mode marker (`NODE_ENV`/`ENV`), and a
//! hot-module-reload flag exactly once, at process start, into an explicit
//! [`EnvironmentInputs`] value. Nothing else in the crate touches the
//! process environment, so composition stays pure and testable without
//! environment manipulation.

use std::env;

use crate::config::schema::{BuildConfig, Mode, DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{Error, Result};

/// Environment-derived build inputs, captured once.
///
/// # Examples
///
/// ```
/// use packrc::config::{BuildConfig, EnvironmentInputs, Mode};
///
/// let inputs = EnvironmentInputs::from_parts("0.0.0.0", 8080, Mode::Production, true);
/// let mut config = BuildConfig::default();
/// inputs.apply_overrides(&mut config);
///
/// assert_eq!(config.dev_server.unwrap().port, Some(8080));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentInputs {
    /// Dev-server host (`HOST`, default `localhost`).
    pub host: String,

    /// Dev-server port (`PORT`, default 3000).
    pub port: u16,

    /// Build mode (`NODE_ENV` falling back to `ENV`, default production).
    pub mode: Mode,

    /// Whether hot module reload was requested.
    pub hmr: bool,
}

impl EnvironmentInputs {
    /// Capture inputs from the process environment.
    ///
    /// `hot` carries the CLI's hot-module-reload flag; when it is unset the
    /// `HMR` environment variable is consulted instead. `HOST` and `PORT`
    /// fall back to `localhost:3000`, and the mode falls back to production.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-numeric `PORT`, an unknown mode
    /// name, or a malformed `HMR` boolean.
    pub fn capture(hot: bool) -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(value) => value.trim().parse().map_err(|_| Error::Validation {
                field: "PORT".into(),
                message: format!("Invalid port number: '{value}'"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let mode = match env::var("NODE_ENV").or_else(|_| env::var("ENV")) {
            Ok(value) => Self::parse_mode("NODE_ENV", &value)?,
            Err(_) => Mode::Production,
        };

        let hmr = if hot {
            true
        } else {
            match env::var("HMR") {
                Ok(value) => Self::parse_bool("HMR", &value)?,
                Err(_) => false,
            }
        };

        Ok(Self {
            host,
            port,
            mode,
            hmr,
        })
    }

    /// Build inputs without touching the process environment.
    #[must_use]
    pub fn from_parts(host: impl Into<String>, port: u16, mode: Mode, hmr: bool) -> Self {
        Self {
            host: host.into(),
            port,
            mode,
            hmr,
        }
    }

    /// Apply captured inputs to a configuration record.
    ///
    /// Writes the mode, the dev-server `host`/`port`, and the constants
    /// table (`env`, `host`, `port`, `hmr`); other metadata fields such as
    /// `api_port` are left untouched. Inputs override whatever the record
    /// already carries.
    pub fn apply_overrides(&self, config: &mut BuildConfig) {
        config.mode = Some(self.mode);

        let dev_server = config.dev_server.get_or_insert_with(Default::default);
        dev_server.host = Some(self.host.clone());
        dev_server.port = Some(self.port);

        let metadata = config.metadata.get_or_insert_with(Default::default);
        metadata.env = Some(self.mode);
        metadata.host = Some(self.host.clone());
        metadata.port = Some(self.port);
        metadata.hmr = Some(self.hmr);
    }

    /// Parse a build mode name.
    ///
    /// Accepts "production" and "development" (case-insensitive).
    fn parse_mode(field: &str, s: &str) -> Result<Mode> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Mode::Production),
            "development" => Ok(Mode::Development),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid mode: '{s}' (expected production or development)"),
            }),
        }
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
