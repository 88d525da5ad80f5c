//! Build configuration schema definitions.
//!
//! This module defines the complete configuration record handed to the
//! external bundler: output naming, source-map strategy, plugin descriptors,
//! dev-server settings, and node polyfill toggles. All fields are optional
//! before composition so that absent keys never clobber present ones when
//! records are merged.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::template::FilenameTemplate;

/// Default dev-server host when `HOST` is not set.
pub const DEFAULT_HOST: &str = "localhost";

/// Default dev-server port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Default backend API port injected into compile-time constants.
pub const DEFAULT_API_PORT: u16 = 4000;

/// Complete build configuration record.
///
/// This is the shape consumed by the external bundler. Known keys are typed;
/// anything else is carried opaquely in `extra` and deep-merged by the
/// generic value rules. The record serializes with the bundler's camelCase
/// key convention.
///
/// # Examples
///
/// ```
/// use packrc::config::{BuildConfig, OutputConfig};
///
/// let config = BuildConfig {
///     output: Some(OutputConfig {
///         path: Some("dist".into()),
///         filename: Some("[name].js".into()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(config.output.is_some());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Build mode marker (the `ENV` constant).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// Source-map generation strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    /// Options affecting emitted files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,

    /// Ordered build plugin descriptors. Accumulated across sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginDescriptor>>,

    /// Development server settings (configured, never run here).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerConfig>,

    /// Node polyfill toggles, per polyfill-category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<IndexMap<String, NodePolyfill>>,

    /// Compile-time constants table feeding the define plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Unknown keys, passed through opaquely to the bundler.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl BuildConfig {
    /// The production overrides table.
    ///
    /// Reproduces the fixed production build literal: `source-map` devtool,
    /// `dist` output with `[name]`/`[id]` templates, a `var`-exposed
    /// `ac_[name]` library, define + loader-options plugins, dev-server
    /// watch timings, and the node polyfill toggles.
    #[must_use]
    pub fn production() -> Self {
        let metadata = Metadata {
            env: Some(Mode::Production),
            host: None,
            port: None,
            api_port: Some(DEFAULT_API_PORT),
            hmr: Some(false),
        };

        let mut node = IndexMap::new();
        node.insert("global".to_string(), NodePolyfill::Enabled);
        node.insert("crypto".to_string(), NodePolyfill::Empty);
        node.insert("process".to_string(), NodePolyfill::Enabled);
        node.insert("module".to_string(), NodePolyfill::Disabled);
        node.insert("clearImmediate".to_string(), NodePolyfill::Disabled);
        node.insert("setImmediate".to_string(), NodePolyfill::Disabled);

        Self {
            mode: Some(Mode::Production),
            devtool: Some(Devtool::SourceMap),
            output: Some(OutputConfig {
                path: Some(PathBuf::from("dist")),
                filename: Some("[name].js".into()),
                source_map_filename: Some("[name].map".into()),
                chunk_filename: Some("[id].chunk.js".into()),
                library: Some("ac_[name]".into()),
                library_target: Some(LibraryTarget::Var),
            }),
            plugins: Some(vec![
                metadata.define_plugin(),
                PluginDescriptor::LoaderOptions {
                    debug: true,
                    options: IndexMap::new(),
                },
            ]),
            dev_server: Some(DevServerConfig {
                port: None,
                host: None,
                history_api_fallback: Some(true),
                watch_options: Some(WatchOptions {
                    aggregate_timeout: Some(300),
                    poll: Some(1000),
                }),
            }),
            node: Some(node),
            metadata: Some(metadata),
            extra: IndexMap::new(),
        }
    }

    /// Serialize the record as pretty-printed JSON, the bundler wire shape.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    /// Serialize the record as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::from)
    }
}

/// Options affecting the output of the compilation.
///
/// # Examples
///
/// ```
/// use packrc::config::OutputConfig;
///
/// let output = OutputConfig {
///     path: Some("dist".into()),
///     chunk_filename: Some("[id].chunk.js".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory for the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Per-entry-point filename template (`[name]` placeholder).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<FilenameTemplate>,

    /// Source-map filename template (`[name]` placeholder).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map_filename: Option<FilenameTemplate>,

    /// Non-entry chunk filename template (`[id]` placeholder).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<FilenameTemplate>,

    /// Library naming convention (may carry `[name]`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<FilenameTemplate>,

    /// How the built library is exposed to its host environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_target: Option<LibraryTarget>,
}

/// Development server settings.
///
/// The server itself is external; only its configuration is assembled here.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DevServerConfig {
    /// Port the dev server listens on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Host the dev server binds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Serve the index page for unknown routes (SPA routing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_api_fallback: Option<bool>,

    /// File-watcher timing settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_options: Option<WatchOptions>,
}

/// File-watcher timing settings, in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WatchOptions {
    /// Delay before rebuilding once a change is seen (ms).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_timeout: Option<u32>,

    /// Polling interval for watched files (ms).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<u32>,
}

/// Compile-time constants table.
///
/// Mirrors the metadata record the define plugin is built from.
///
/// # Examples
///
/// ```
/// use packrc::config::{Metadata, Mode};
///
/// let metadata = Metadata {
///     env: Some(Mode::Production),
///     api_port: Some(4000),
///     hmr: Some(false),
///     ..Default::default()
/// };
/// let plugin = metadata.define_plugin();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Metadata {
    /// Build mode exposed as the `ENV` constant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Mode>,

    /// Dev-server host mirrored into the constants table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Dev-server port mirrored into the constants table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Backend API port exposed as `API_PORT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_port: Option<u16>,

    /// Whether hot module reload was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmr: Option<bool>,
}

impl Metadata {
    /// Build the constant-injection plugin descriptor from this table.
    ///
    /// Exposes `ENV`, `API_PORT` and `HMR` as free variables and the same
    /// values again under a nested `process.env` record (with `NODE_ENV`
    /// aliasing `ENV`), matching what the consuming code expects to find.
    #[must_use]
    pub fn define_plugin(&self) -> PluginDescriptor {
        let mode = self.env.unwrap_or(Mode::Production);
        let hmr = self.hmr.unwrap_or(false);

        let mut process_env = serde_json::Map::new();
        process_env.insert("ENV".to_string(), Value::from(mode.to_string()));
        process_env.insert("NODE_ENV".to_string(), Value::from(mode.to_string()));
        process_env.insert("HMR".to_string(), Value::from(hmr));
        if let Some(api_port) = self.api_port {
            process_env.insert("API_PORT".to_string(), Value::from(api_port));
        }

        let mut definitions = IndexMap::new();
        definitions.insert("ENV".to_string(), Value::from(mode.to_string()));
        if let Some(api_port) = self.api_port {
            definitions.insert("API_PORT".to_string(), Value::from(api_port));
        }
        definitions.insert("HMR".to_string(), Value::from(hmr));
        definitions.insert("process.env".to_string(), Value::Object(process_env));

        PluginDescriptor::Define { definitions }
    }
}

/// Build mode marker.
///
/// # Examples
///
/// ```
/// use packrc::config::Mode;
///
/// assert_eq!(Mode::Production.to_string(), "production");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Optimized production build.
    Production,
    /// Development build.
    Development,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// Source-map generation strategy.
///
/// Serialized as the bundler's kebab-case strategy names, with the special
/// boolean `false` form meaning "disabled".
///
/// # Examples
///
/// ```
/// use packrc::config::Devtool;
///
/// let devtool: Devtool = serde_yaml::from_str("source-map").unwrap();
/// assert_eq!(devtool, Devtool::SourceMap);
///
/// let disabled: Devtool = serde_yaml::from_str("false").unwrap();
/// assert_eq!(disabled, Devtool::Disabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
    /// Full separate source maps.
    SourceMap,
    /// Faster maps without column mappings.
    CheapModuleSourceMap,
    /// Eval-based cheap maps.
    CheapEvalSourceMap,
    /// Maps inlined into the bundle as data URLs.
    InlineSourceMap,
    /// Maps emitted but not referenced from the bundle.
    HiddenSourceMap,
    /// Maps without source content.
    NosourcesSourceMap,
    /// Plain eval, no maps.
    Eval,
    /// Source maps disabled.
    Disabled,
}

impl Devtool {
    /// The strategy name the bundler understands, or `"false"` for
    /// [`Devtool::Disabled`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceMap => "source-map",
            Self::CheapModuleSourceMap => "cheap-module-source-map",
            Self::CheapEvalSourceMap => "cheap-eval-source-map",
            Self::InlineSourceMap => "inline-source-map",
            Self::HiddenSourceMap => "hidden-source-map",
            Self::NosourcesSourceMap => "nosources-source-map",
            Self::Eval => "eval",
            Self::Disabled => "false",
        }
    }
}

impl std::fmt::Display for Devtool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Devtool {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Devtool {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Flag(bool),
            Name(String),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Flag(false) => Ok(Devtool::Disabled),
            Helper::Flag(true) => Err(D::Error::custom(
                "devtool: true is not a strategy; name one or use false",
            )),
            Helper::Name(name) => match name.as_str() {
                "source-map" => Ok(Devtool::SourceMap),
                "cheap-module-source-map" => Ok(Devtool::CheapModuleSourceMap),
                "cheap-eval-source-map" => Ok(Devtool::CheapEvalSourceMap),
                "inline-source-map" => Ok(Devtool::InlineSourceMap),
                "hidden-source-map" => Ok(Devtool::HiddenSourceMap),
                "nosources-source-map" => Ok(Devtool::NosourcesSourceMap),
                "eval" => Ok(Devtool::Eval),
                "false" => Ok(Devtool::Disabled),
                _ => Err(D::Error::custom(format!("unknown devtool: {name}"))),
            },
        }
    }
}

/// Global-exposure strategy for the built library.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// Assign to a `var` in the enclosing scope.
    Var,
    /// Assign to a property of `this`.
    This,
    /// Assign to a property of `window`.
    Window,
    /// Assign to a property of the global object.
    Global,
    /// Export via CommonJS `exports`.
    Commonjs,
    /// Export via CommonJS `module.exports`.
    Commonjs2,
    /// Export as an AMD module.
    Amd,
    /// Export as a UMD module.
    Umd,
    /// Export via a JSONP callback.
    Jsonp,
}

impl std::fmt::Display for LibraryTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var => write!(f, "var"),
            Self::This => write!(f, "this"),
            Self::Window => write!(f, "window"),
            Self::Global => write!(f, "global"),
            Self::Commonjs => write!(f, "commonjs"),
            Self::Commonjs2 => write!(f, "commonjs2"),
            Self::Amd => write!(f, "amd"),
            Self::Umd => write!(f, "umd"),
            Self::Jsonp => write!(f, "jsonp"),
        }
    }
}

/// Node polyfill toggle: enabled, disabled, or stubbed out.
///
/// Serialized as `true`, `false`, or the sentinel string `"empty"` (stub
/// the module out instead of polyfilling it).
///
/// # Examples
///
/// ```
/// use packrc::config::NodePolyfill;
///
/// let empty: NodePolyfill = serde_yaml::from_str("\"empty\"").unwrap();
/// assert_eq!(empty, NodePolyfill::Empty);
///
/// let enabled: NodePolyfill = serde_yaml::from_str("true").unwrap();
/// assert_eq!(enabled, NodePolyfill::Enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePolyfill {
    /// Provide the polyfill.
    Enabled,
    /// Do not provide the polyfill.
    Disabled,
    /// Stub the module out with an empty object.
    Empty,
}

impl Serialize for NodePolyfill {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Enabled => serializer.serialize_bool(true),
            Self::Disabled => serializer.serialize_bool(false),
            Self::Empty => serializer.serialize_str("empty"),
        }
    }
}

impl<'de> Deserialize<'de> for NodePolyfill {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Flag(bool),
            Sentinel(String),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Flag(true) => Ok(NodePolyfill::Enabled),
            Helper::Flag(false) => Ok(NodePolyfill::Disabled),
            Helper::Sentinel(s) if s == "empty" => Ok(NodePolyfill::Empty),
            Helper::Sentinel(s) => Err(D::Error::custom(format!(
                "invalid polyfill toggle: '{s}' (expected true, false or \"empty\")"
            ))),
        }
    }
}

impl std::fmt::Display for NodePolyfill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled => write!(f, "true"),
            Self::Disabled => write!(f, "false"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// An opaque unit of build-time behavior consumed by the external bundler.
///
/// Descriptors are data, not behavior: each names a plugin kind and carries
/// its parameters. The bundler instantiates them; this system only composes
/// and orders them.
///
/// # Examples
///
/// ```
/// use packrc::config::PluginDescriptor;
///
/// let yaml = "plugin: loader-options\ndebug: true\n";
/// let descriptor: PluginDescriptor = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(descriptor.kind(), "loader-options");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    /// Define free variables at compile time.
    Define {
        /// Free-variable name to injected JSON value.
        #[serde(default)]
        definitions: IndexMap<String, Value>,
    },

    /// Use file names as module names.
    NamedModules,

    /// Pass options through to legacy loaders.
    LoaderOptions {
        /// Enable loader debug mode.
        #[serde(default)]
        debug: bool,

        /// Opaque options record handed to loaders.
        #[serde(default)]
        options: IndexMap<String, Value>,
    },
}

impl PluginDescriptor {
    /// The descriptor's kind tag, as serialized.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Define { .. } => "define",
            Self::NamedModules => "named-modules",
            Self::LoaderOptions { .. } => "loader-options",
        }
    }
}

/// Output format for emitted records.
///
/// # Examples
///
/// ```
/// use packrc::config::EmitFormat;
///
/// let format: EmitFormat = "yaml".parse().unwrap();
/// assert_eq!(format, EmitFormat::Yaml);
/// assert_eq!(EmitFormat::Json.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// Pretty-printed JSON (the bundler wire shape).
    Json,
    /// YAML.
    Yaml,
}

impl std::fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for EmitFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("invalid format: {s} (expected json or yaml)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_is_empty() {
        let config = BuildConfig::default();
        assert!(config.mode.is_none());
        assert!(config.output.is_none());
        assert!(config.plugins.is_none());
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_minimal_config() {
        let yaml = "devtool: source-map\n";
        let config: BuildConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.devtool, Some(Devtool::SourceMap));
    }

    #[test]
    fn test_complete_config() {
        let yaml = r#"
mode: production
devtool: source-map
output:
  path: dist
  filename: "[name].js"
  sourceMapFilename: "[name].map"
  chunkFilename: "[id].chunk.js"
  library: "ac_[name]"
  libraryTarget: var
plugins:
  - plugin: define
    definitions:
      ENV: production
  - plugin: loader-options
    debug: true
devServer:
  port: 3000
  host: localhost
  historyApiFallback: true
  watchOptions:
    aggregateTimeout: 300
    poll: 1000
node:
  global: true
  crypto: "empty"
  module: false
"#;
        let config: BuildConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.mode, Some(Mode::Production));

        let output = config.output.unwrap();
        assert_eq!(output.path, Some(PathBuf::from("dist")));
        assert_eq!(output.library_target, Some(LibraryTarget::Var));
        assert!(output.chunk_filename.unwrap().has_token("id"));

        let plugins = config.plugins.unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].kind(), "define");

        let dev_server = config.dev_server.unwrap();
        assert_eq!(dev_server.port, Some(3000));
        assert_eq!(dev_server.watch_options.unwrap().poll, Some(1000));

        let node = config.node.unwrap();
        assert_eq!(node.get("crypto"), Some(&NodePolyfill::Empty));
        assert_eq!(node.get("module"), Some(&NodePolyfill::Disabled));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let yaml = "devtool: eval\nbail: true\nprofile:\n  hints: warning\n";
        let config: BuildConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.extra.len(), 2);
        assert_eq!(config.extra.get("bail"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let config = BuildConfig::production();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"sourceMapFilename\""));
        assert!(json.contains("\"chunkFilename\""));
        assert!(json.contains("\"libraryTarget\""));
        assert!(json.contains("\"historyApiFallback\""));
        assert!(json.contains("\"aggregateTimeout\""));
        // Absent optional keys are omitted, not emitted as null.
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_devtool_forms() {
        assert_eq!(
            serde_yaml::from_str::<Devtool>("cheap-module-source-map").unwrap(),
            Devtool::CheapModuleSourceMap
        );
        assert_eq!(
            serde_yaml::from_str::<Devtool>("false").unwrap(),
            Devtool::Disabled
        );
        assert!(serde_yaml::from_str::<Devtool>("true").is_err());
        assert!(serde_yaml::from_str::<Devtool>("best-source-map").is_err());
    }

    #[test]
    fn test_devtool_disabled_serializes_as_false() {
        let json = serde_json::to_string(&Devtool::Disabled).unwrap();
        assert_eq!(json, "false");
        let json = serde_json::to_string(&Devtool::SourceMap).unwrap();
        assert_eq!(json, "\"source-map\"");
    }

    #[test]
    fn test_node_polyfill_forms() {
        assert_eq!(
            serde_yaml::from_str::<NodePolyfill>("true").unwrap(),
            NodePolyfill::Enabled
        );
        assert_eq!(
            serde_yaml::from_str::<NodePolyfill>("false").unwrap(),
            NodePolyfill::Disabled
        );
        assert_eq!(
            serde_yaml::from_str::<NodePolyfill>("\"empty\"").unwrap(),
            NodePolyfill::Empty
        );
        assert!(serde_yaml::from_str::<NodePolyfill>("\"mock\"").is_err());
    }

    #[test]
    fn test_plugin_descriptor_tagging() {
        let json = serde_json::to_string(&PluginDescriptor::NamedModules).unwrap();
        assert_eq!(json, "{\"plugin\":\"named-modules\"}");

        let descriptor: PluginDescriptor =
            serde_json::from_str("{\"plugin\":\"define\",\"definitions\":{\"HMR\":false}}")
                .unwrap();
        match descriptor {
            PluginDescriptor::Define { definitions } => {
                assert_eq!(definitions.get("HMR"), Some(&Value::Bool(false)));
            }
            other => panic!("expected define descriptor, got {other:?}"),
        }
    }

    #[test]
    fn test_define_plugin_from_metadata() {
        let metadata = Metadata {
            env: Some(Mode::Production),
            host: Some("localhost".to_string()),
            port: Some(3000),
            api_port: Some(4000),
            hmr: Some(true),
        };

        match metadata.define_plugin() {
            PluginDescriptor::Define { definitions } => {
                assert_eq!(definitions.get("ENV"), Some(&Value::from("production")));
                assert_eq!(definitions.get("API_PORT"), Some(&Value::from(4000)));
                assert_eq!(definitions.get("HMR"), Some(&Value::Bool(true)));

                let process_env = definitions.get("process.env").unwrap();
                assert_eq!(process_env["NODE_ENV"], Value::from("production"));
                assert_eq!(process_env["ENV"], Value::from("production"));
                assert_eq!(process_env["API_PORT"], Value::from(4000));
            }
            other => panic!("expected define descriptor, got {other:?}"),
        }
    }

    #[test]
    fn test_production_overrides_table() {
        let config = BuildConfig::production();

        assert_eq!(config.mode, Some(Mode::Production));
        assert_eq!(config.devtool, Some(Devtool::SourceMap));

        let output = config.output.unwrap();
        assert_eq!(output.filename, Some("[name].js".into()));
        assert_eq!(output.source_map_filename, Some("[name].map".into()));
        assert_eq!(output.chunk_filename, Some("[id].chunk.js".into()));
        assert_eq!(output.library, Some("ac_[name]".into()));

        let plugins = config.plugins.unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].kind(), "define");
        assert_eq!(plugins[1].kind(), "loader-options");

        let watch = config.dev_server.unwrap().watch_options.unwrap();
        assert_eq!(watch.aggregate_timeout, Some(300));
        assert_eq!(watch.poll, Some(1000));

        let node = config.node.unwrap();
        assert_eq!(node.get("global"), Some(&NodePolyfill::Enabled));
        assert_eq!(node.get("crypto"), Some(&NodePolyfill::Empty));
        assert_eq!(node.get("setImmediate"), Some(&NodePolyfill::Disabled));
    }

    #[test]
    fn test_output_config_rejects_unknown_fields() {
        let yaml = "path: dist\npublicPath: /assets/\n";
        let result: std::result::Result<OutputConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_emit_format() {
        assert_eq!("json".parse::<EmitFormat>().unwrap(), EmitFormat::Json);
        assert_eq!("YML".parse::<EmitFormat>().unwrap(), EmitFormat::Yaml);
        assert!("toml".parse::<EmitFormat>().is_err());
        assert_eq!(EmitFormat::Yaml.to_string(), "yaml");
    }
}

// Property-based tests for schema components
#[cfg(test)]
#[allow(unused_doc_comments)] // proptest! macro doesn't support doc comments
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Property: NodePolyfill roundtrips through its serialized forms
    ///
    /// Mathematical Property: deserialize(serialize(x)) = x for all toggles.
    proptest! {
        #[test]
        fn prop_node_polyfill_roundtrip(choice in 0u8..=2) {
            let toggle = match choice {
                0 => NodePolyfill::Enabled,
                1 => NodePolyfill::Disabled,
                _ => NodePolyfill::Empty,
            };

            let yaml = serde_yaml::to_string(&toggle).unwrap();
            let deserialized: NodePolyfill = serde_yaml::from_str(&yaml).unwrap();
            prop_assert_eq!(deserialized, toggle, "NodePolyfill should roundtrip");
        }
    }

    /// Property: Devtool roundtrips, including the boolean disabled form
    proptest! {
        #[test]
        fn prop_devtool_roundtrip(choice in 0u8..=7) {
            let devtool = match choice {
                0 => Devtool::SourceMap,
                1 => Devtool::CheapModuleSourceMap,
                2 => Devtool::CheapEvalSourceMap,
                3 => Devtool::InlineSourceMap,
                4 => Devtool::HiddenSourceMap,
                5 => Devtool::NosourcesSourceMap,
                6 => Devtool::Eval,
                _ => Devtool::Disabled,
            };

            let json = serde_json::to_string(&devtool).unwrap();
            let deserialized: Devtool = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(deserialized, devtool, "Devtool should roundtrip");
        }
    }

    /// Property: config serialization is idempotent
    ///
    /// Mathematical Property: serialize(deserialize(serialize(x))) = serialize(x)
    proptest! {
        #[test]
        fn prop_config_serde_idempotent(
            port in proptest::option::of(1u16..=65535),
            host in proptest::option::of("[a-z]{1,12}"),
            history in proptest::option::of(any::<bool>()),
            poll in proptest::option::of(1u32..=10_000),
        ) {
            let config = BuildConfig {
                mode: Some(Mode::Production),
                dev_server: Some(DevServerConfig {
                    port,
                    host,
                    history_api_fallback: history,
                    watch_options: Some(WatchOptions {
                        aggregate_timeout: Some(300),
                        poll,
                    }),
                }),
                ..Default::default()
            };

            let yaml1 = serde_yaml::to_string(&config).unwrap();
            let config2: BuildConfig = serde_yaml::from_str(&yaml1).unwrap();
            let yaml2 = serde_yaml::to_string(&config2).unwrap();

            prop_assert_eq!(yaml1, yaml2, "Serialization should be idempotent");
            prop_assert_eq!(config, config2, "Config should roundtrip");
        }
    }

    /// Property: templates survive the trip through the record unchanged
    proptest! {
        #[test]
        fn prop_output_templates_roundtrip(stem in "[a-z]{1,10}") {
            let config = BuildConfig {
                output: Some(OutputConfig {
                    filename: Some(format!("[name].{stem}.js").into()),
                    chunk_filename: Some(format!("[id].{stem}.js").into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let json = config.to_json_pretty().unwrap();
            let parsed: BuildConfig = serde_json::from_str(&json).unwrap();
            let output = parsed.output.unwrap();

            prop_assert!(output.filename.unwrap().has_token("name"));
            prop_assert!(output.chunk_filename.unwrap().has_token("id"));
        }
    }
}
