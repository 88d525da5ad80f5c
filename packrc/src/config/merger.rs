//! Configuration merging and precedence handling.
//!
//! This module implements the composition of build configuration records:
//! later sources override earlier ones key by key, nested records merge
//! recursively, and sequence-valued keys (the plugin list) accumulate by
//! concatenation. Composition is a pure transform with no error conditions;
//! absent keys are added and type conflicts inside opaque values are
//! resolved by the overriding value winning outright.

use crate::config::loader::ConfigSource;
use crate::config::schema::{
    BuildConfig, DevServerConfig, Metadata, OutputConfig, WatchOptions,
};
use crate::value;

/// Merges configuration records according to precedence rules.
///
/// # Examples
///
/// ```
/// use packrc::config::{BuildConfig, ConfigMerger, Devtool};
///
/// let base = BuildConfig { devtool: Some(Devtool::Eval), ..Default::default() };
/// let overrides = BuildConfig { devtool: Some(Devtool::SourceMap), ..Default::default() };
///
/// let merged = ConfigMerger::compose(&base, &overrides);
/// assert_eq!(merged.devtool, Some(Devtool::SourceMap));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into a final record.
    ///
    /// Sources should be provided in order from lowest to highest
    /// precedence; each successive source overrides the accumulated result.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> BuildConfig {
        let mut result = BuildConfig::default();

        // Process in order (lowest to highest precedence)
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Compose a base record with an overriding record, returning the merge.
    ///
    /// Pure counterpart of [`merge_into`](Self::merge_into); neither input
    /// is modified.
    #[must_use]
    pub fn compose(base: &BuildConfig, overrides: &BuildConfig) -> BuildConfig {
        let mut merged = base.clone();
        Self::merge_into(&mut merged, overrides);
        merged
    }

    /// Merge a source record into a target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Plugins: accumulated (target's list followed by the source's)
    /// - Output, dev server, metadata: field-by-field merge
    /// - Node polyfills: per-category overwrite, new categories appended
    /// - Opaque keys: generic deep merge (records recurse, sequences
    ///   concatenate, scalars replace)
    pub fn merge_into(target: &mut BuildConfig, source: &BuildConfig) {
        // Simple fields - source overwrites if Some
        if source.mode.is_some() {
            target.mode = source.mode;
        }

        if source.devtool.is_some() {
            target.devtool = source.devtool;
        }

        // Merge output options
        if let Some(ref source_output) = source.output {
            target.output = Some(match &target.output {
                Some(target_output) => Self::merge_output(target_output, source_output),
                None => source_output.clone(),
            });
        }

        // Merge plugins (ordered accumulation, no de-duplication)
        if let Some(ref source_plugins) = source.plugins {
            match &mut target.plugins {
                Some(target_plugins) => {
                    target_plugins.extend(source_plugins.iter().cloned());
                }
                None => {
                    target.plugins.clone_from(&source.plugins);
                }
            }
        }

        // Merge dev server settings
        if let Some(ref source_server) = source.dev_server {
            target.dev_server = Some(match &target.dev_server {
                Some(target_server) => Self::merge_dev_server(target_server, source_server),
                None => source_server.clone(),
            });
        }

        // Merge node polyfill toggles per category
        if let Some(ref source_node) = source.node {
            match &mut target.node {
                Some(target_node) => {
                    for (category, toggle) in source_node {
                        target_node.insert(category.clone(), *toggle);
                    }
                }
                None => {
                    target.node.clone_from(&source.node);
                }
            }
        }

        // Merge the constants table
        if let Some(ref source_metadata) = source.metadata {
            target.metadata = Some(match &target.metadata {
                Some(target_metadata) => Self::merge_metadata(target_metadata, source_metadata),
                None => source_metadata.clone(),
            });
        }

        // Opaque pass-through keys follow the generic value rules
        for (key, source_value) in &source.extra {
            match target.extra.get_mut(key) {
                Some(slot) => value::merge_into(slot, source_value.clone()),
                None => {
                    target.extra.insert(key.clone(), source_value.clone());
                }
            }
        }
    }

    /// Merge output options.
    ///
    /// Source values take precedence over target values.
    fn merge_output(target: &OutputConfig, source: &OutputConfig) -> OutputConfig {
        OutputConfig {
            path: source.path.clone().or_else(|| target.path.clone()),
            filename: source.filename.clone().or_else(|| target.filename.clone()),
            source_map_filename: source
                .source_map_filename
                .clone()
                .or_else(|| target.source_map_filename.clone()),
            chunk_filename: source
                .chunk_filename
                .clone()
                .or_else(|| target.chunk_filename.clone()),
            library: source.library.clone().or_else(|| target.library.clone()),
            library_target: source.library_target.or(target.library_target),
        }
    }

    /// Merge dev server settings, including the nested watch options.
    fn merge_dev_server(target: &DevServerConfig, source: &DevServerConfig) -> DevServerConfig {
        let watch_options = match (&target.watch_options, &source.watch_options) {
            (Some(target_watch), Some(source_watch)) => {
                Some(Self::merge_watch_options(target_watch, source_watch))
            }
            (None, Some(source_watch)) => Some(source_watch.clone()),
            (existing, None) => existing.clone(),
        };

        DevServerConfig {
            port: source.port.or(target.port),
            host: source.host.clone().or_else(|| target.host.clone()),
            history_api_fallback: source.history_api_fallback.or(target.history_api_fallback),
            watch_options,
        }
    }

    /// Merge watch timing settings.
    fn merge_watch_options(target: &WatchOptions, source: &WatchOptions) -> WatchOptions {
        WatchOptions {
            aggregate_timeout: source.aggregate_timeout.or(target.aggregate_timeout),
            poll: source.poll.or(target.poll),
        }
    }

    /// Merge the compile-time constants table.
    fn merge_metadata(target: &Metadata, source: &Metadata) -> Metadata {
        Metadata {
            env: source.env.or(target.env),
            host: source.host.clone().or_else(|| target.host.clone()),
            port: source.port.or(target.port),
            api_port: source.api_port.or(target.api_port),
            hmr: source.hmr.or(target.hmr),
        }
    }
}
