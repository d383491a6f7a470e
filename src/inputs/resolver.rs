//! Per-field input resolvers.
//!
//! Every resolver follows the same three steps (presence, validity, value)
//! through [`probe_input`] and then applies its own policy for malformed
//! input.

use super::source::{InputProbe, InputSource};
use super::types::*;
use crate::outcome::{Resolved, new_error};

/// Shared presence/validity/value resolution.
///
/// Absent inputs resolve to the default without an error. Malformed inputs
/// resolve to `provided = true`, the default value, and the coercion error;
/// the field resolvers decide what to do with that.
fn probe_input<T>(probe: InputProbe<T>, default_value: T) -> Resolved<InputValue<T>> {
    match probe {
        InputProbe::Absent => Resolved::ok(InputValue::absent(default_value)),
        InputProbe::Invalid(reason) => {
            Resolved::with_error(InputValue::provided(default_value), new_error(reason))
        }
        InputProbe::Valid(value) => Resolved::ok(InputValue::provided(value)),
    }
}

/// Resolve `ignore`. Malformed input falls back silently.
pub fn get_ignore_globs(
    source: &dyn InputSource,
    default_value: Vec<String>,
) -> Resolved<InputValue<Vec<String>>> {
    let resolved = probe_input(
        source.get_multiline_input(INPUT_NAME_IGNORE),
        default_value,
    );
    Resolved::ok(resolved.value)
}

/// Resolve `dry-run`. Malformed input resolves to `true`.
pub fn get_is_dry_run(
    source: &dyn InputSource,
    default_value: bool,
) -> Resolved<InputValue<bool>> {
    get_fail_safe_boolean(source, INPUT_NAME_DRY_RUN, default_value)
}

/// Resolve `strict`. Malformed input resolves to `true`.
pub fn get_is_strict_mode(
    source: &dyn InputSource,
    default_value: bool,
) -> Resolved<InputValue<bool>> {
    get_fail_safe_boolean(source, INPUT_NAME_STRICT, default_value)
}

/// Resolve `svgo-config`.
pub fn get_svgo_config_path(
    source: &dyn InputSource,
    default_value: String,
) -> Resolved<InputValue<String>> {
    probe_input(source.get_input(INPUT_NAME_SVGO_CONFIG), default_value)
}

/// Resolve `svgo-version`.
///
/// A non-numeric value keeps the default and reports the coercion error as
/// is. A number other than exactly 1 or 2 is unsupported: it also keeps the
/// default, never the out-of-range number.
pub fn get_svgo_version(
    source: &dyn InputSource,
    default_value: SvgoVersion,
) -> Resolved<InputValue<SvgoVersion>> {
    let resolved = probe_input(
        source.get_decimal_input(INPUT_NAME_SVGO_VERSION),
        f64::from(u8::from(default_value)),
    );
    if !resolved.is_ok() || !resolved.value.provided {
        return resolved.map(|input| InputValue {
            provided: input.provided,
            value: default_value,
        });
    }

    let number = resolved.value.value;
    match SvgoVersion::from_number(number) {
        Some(version) => Resolved::ok(InputValue::provided(version)),
        None => Resolved::with_error(
            InputValue::provided(default_value),
            new_error(format!("Unsupported SVGO version '{}'", number)),
        ),
    }
}

fn get_fail_safe_boolean(
    source: &dyn InputSource,
    name: &str,
    default_value: bool,
) -> Resolved<InputValue<bool>> {
    let resolved = probe_input(source.get_boolean_input(name), default_value);
    if resolved.is_ok() {
        return resolved;
    }

    log::debug!("input '{}' is malformed, falling back to true", name);
    Resolved::with_error(
        InputValue::provided(true),
        new_error(format!("Invalid value for input '{}'", name)),
    )
}
