//! Input names, value types and defaults.

use serde::Serialize;

/// Glob patterns excluded from optimization (multiline).
pub const INPUT_NAME_IGNORE: &str = "ignore";
/// Compute but do not persist changes (boolean).
pub const INPUT_NAME_DRY_RUN: &str = "dry-run";
/// Escalate soft conditions to hard failures (boolean).
pub const INPUT_NAME_STRICT: &str = "strict";
/// Path to the optimizer configuration file (string).
pub const INPUT_NAME_SVGO_CONFIG: &str = "svgo-config";
/// Major version of the optimizer, 1 or 2 (decimal).
pub const INPUT_NAME_SVGO_VERSION: &str = "svgo-version";

/// Default optimizer configuration file for SVGO v1 (structured text).
pub const DEFAULT_SVGO_CONFIG_PATH_V1: &str = ".svgo.yml";
/// Default optimizer configuration file for SVGO v2 (module).
pub const DEFAULT_SVGO_CONFIG_PATH_V2: &str = "svgo.config.js";

/// Supported optimizer major versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u8")]
pub enum SvgoVersion {
    /// Configuration is a YAML document.
    V1,
    /// Configuration is a module exporting an options object (default).
    #[default]
    V2,
}

impl SvgoVersion {
    /// Map a decimal input to a supported version.
    ///
    /// Only exactly `1` and `2` are accepted; `2.0` counts as `2`, `1.5` and
    /// `3` do not.
    pub fn from_number(n: f64) -> Option<Self> {
        if n == 1.0 {
            Some(Self::V1)
        } else if n == 2.0 {
            Some(Self::V2)
        } else {
            None
        }
    }

    /// Default configuration path for this version.
    pub fn default_config_path(self) -> &'static str {
        match self {
            Self::V1 => DEFAULT_SVGO_CONFIG_PATH_V1,
            Self::V2 => DEFAULT_SVGO_CONFIG_PATH_V2,
        }
    }
}

impl From<SvgoVersion> for u8 {
    fn from(version: SvgoVersion) -> Self {
        match version {
            SvgoVersion::V1 => 1,
            SvgoVersion::V2 => 2,
        }
    }
}

impl std::fmt::Display for SvgoVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A resolved input.
///
/// `provided` records whether the caller supplied the input at all,
/// independent of whether it was valid. `value` is always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputValue<T> {
    pub provided: bool,
    pub value: T,
}

impl<T> InputValue<T> {
    pub fn provided(value: T) -> Self {
        Self {
            provided: true,
            value,
        }
    }

    pub fn absent(value: T) -> Self {
        Self {
            provided: false,
            value,
        }
    }
}
