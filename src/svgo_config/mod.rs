//! Optimizer configuration parsing.
//!
//! User-authored configuration text is untrusted. It is parsed through safe
//! parsers that never fail: a parse problem yields `Value::Null` and an
//! error message instead.
//!
//! Two strategies exist, selected by the optimizer version:
//! - SVGO v2: a module exporting an options object (`svgo.config.js`)
//! - SVGO v1: a YAML document (`.svgo.yml`)

mod module;
mod safe_parser;


use crate::inputs::SvgoVersion;
use crate::outcome::Resolved;
use serde_json::Value;
use std::sync::LazyLock;

pub use module::{ModuleError, evaluate_module};
pub use safe_parser::{SafeParseFn, build_safe_parser};

static MODULE_PARSER: LazyLock<SafeParseFn<Value>> =
    LazyLock::new(|| Box::new(build_safe_parser(evaluate_module)));

static YAML_PARSER: LazyLock<SafeParseFn<Value>> =
    LazyLock::new(|| Box::new(build_safe_parser(parse_yaml)));

/// Parse configuration text as an exported module (SVGO v2).
pub fn parse_module_config(raw: &str) -> Resolved<Value> {
    (*MODULE_PARSER)(raw)
}

/// Parse configuration text as YAML (SVGO v1).
pub fn parse_yaml_config(raw: &str) -> Resolved<Value> {
    (*YAML_PARSER)(raw)
}

/// Parse configuration text with the strategy for `svgo_version`.
///
/// Version 1 selects YAML; everything else selects module evaluation.
pub fn parse_raw_svgo_config(raw: &str, svgo_version: SvgoVersion) -> Resolved<Value> {
    if svgo_version == SvgoVersion::V1 {
        parse_yaml_config(raw)
    } else {
        parse_module_config(raw)
    }
}

fn parse_yaml(raw: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}
