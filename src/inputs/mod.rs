//! Run input resolution for svgplan.
//!
//! Raw inputs are read through an [`InputSource`] and resolved into a typed,
//! defaulted [`Config`]. Resolution never fails outright: an absent input
//! silently takes its default, a malformed one takes a field-specific
//! fallback and produces an error message, and all errors are merged with
//! [`crate::outcome::combine`].

mod model;
mod resolver;
mod source;
pub mod types;


// Re-export public API
pub use model::{Config, ConfigDefaults};
pub use resolver::{
    get_ignore_globs, get_is_dry_run, get_is_strict_mode, get_svgo_config_path, get_svgo_version,
};
pub use source::{EnvInputSource, InputProbe, InputSource, LayeredInputSource, MapInputSource};
pub use types::{InputValue, SvgoVersion};
