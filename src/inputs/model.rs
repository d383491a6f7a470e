//! Config struct definition and aggregate resolution.

use super::resolver::*;
use super::source::InputSource;
use super::types::SvgoVersion;
use crate::outcome::{Resolved, combine};
use serde::Serialize;

/// The fully resolved configuration for one run.
///
/// Always valid: every field holds either the caller's value or a fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Glob patterns excluded from optimization.
    pub ignore_globs: Vec<String>,

    /// Compute results without persisting them.
    pub is_dry_run: bool,

    /// Path to the optimizer configuration, relative to the repository root.
    pub svgo_config_path: String,

    /// Optimizer major version; selects the configuration parse strategy.
    pub svgo_version: SvgoVersion,
}

/// Defaults used for inputs that were not provided.
///
/// `svgo_config_path` has no single default: it depends on the resolved
/// version, so both candidates live here.
#[derive(Debug, Clone)]
pub struct ConfigDefaults {
    pub ignore_globs: Vec<String>,
    pub is_dry_run: bool,
    pub svgo_version: SvgoVersion,
    pub svgo_config_path_v1: String,
    pub svgo_config_path_v2: String,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            ignore_globs: Vec::new(),
            is_dry_run: false,
            svgo_version: SvgoVersion::default(),
            svgo_config_path_v1: SvgoVersion::V1.default_config_path().to_string(),
            svgo_config_path_v2: SvgoVersion::V2.default_config_path().to_string(),
        }
    }
}

impl ConfigDefaults {
    fn svgo_config_path(&self, version: SvgoVersion) -> &str {
        match version {
            SvgoVersion::V1 => &self.svgo_config_path_v1,
            SvgoVersion::V2 => &self.svgo_config_path_v2,
        }
    }
}

impl Config {
    /// Resolve the config from an input source using the built-in defaults.
    pub fn resolve(source: &dyn InputSource) -> Resolved<Config> {
        Self::resolve_with(source, &ConfigDefaults::default())
    }

    /// Resolve every field and merge their errors.
    ///
    /// All resolvers run regardless of earlier failures. The default config
    /// path is chosen from the resolved version, not the raw input.
    pub fn resolve_with(source: &dyn InputSource, defaults: &ConfigDefaults) -> Resolved<Config> {
        let (ignore_globs, ignore_err) =
            get_ignore_globs(source, defaults.ignore_globs.clone()).into_parts();
        let (is_dry_run, dry_run_err) = get_is_dry_run(source, defaults.is_dry_run).into_parts();
        let (svgo_version, version_err) =
            get_svgo_version(source, defaults.svgo_version).into_parts();
        let (svgo_config_path, path_err) = get_svgo_config_path(
            source,
            defaults.svgo_config_path(svgo_version.value).to_string(),
        )
        .into_parts();

        let config = Config {
            ignore_globs: ignore_globs.value,
            is_dry_run: is_dry_run.value,
            svgo_config_path: svgo_config_path.value,
            svgo_version: svgo_version.value,
        };
        log::debug!("resolved config: {:?}", config);

        Resolved::with_error(
            config,
            combine([ignore_err, dry_run_err, path_err, version_err]),
        )
    }
}
