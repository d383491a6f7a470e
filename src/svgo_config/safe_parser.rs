//! Wrapping fallible parse functions into non-failing ones.

use crate::outcome::{Resolved, new_error};
use std::any::Any;
use std::cell::Cell;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

thread_local! {
    /// Set while this thread runs a parse function under `catch_unwind`.
    static TRAPPING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// A parse function that never fails: it always yields a value.
pub type SafeParseFn<T> = Box<dyn Fn(&str) -> Resolved<T> + Send + Sync>;

/// Build a safe parser from `parse_fn`.
///
/// Both an `Err` return and a panic inside `parse_fn` are trapped. On
/// failure the result holds `T::default()` and the error
/// `parse error (<message>)`. Nothing is retried. A trapped panic is not
/// printed by the panic hook.
///
/// ```
/// use svgplan::svgo_config::build_safe_parser;
///
/// let parse = build_safe_parser(|raw: &str| raw.parse::<u32>());
/// assert_eq!(parse("42").value, 42);
/// assert!(parse("x").error.unwrap().starts_with("parse error ("));
/// ```
pub fn build_safe_parser<T, E, F>(parse_fn: F) -> impl Fn(&str) -> Resolved<T> + Send + Sync
where
    T: Default,
    E: Display,
    F: Fn(&str) -> Result<T, E> + Send + Sync,
{
    install_quiet_hook();
    move |raw: &str| match trap(|| parse_fn(raw)) {
        Ok(Ok(value)) => Resolved::ok(value),
        Ok(Err(e)) => parse_failure(&e.to_string()),
        Err(payload) => parse_failure(&panic_message(payload.as_ref())),
    }
}

/// Wraps the process panic hook once so panics on a trapping thread stay
/// silent. Other panics still reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !TRAPPING.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

fn trap<R>(f: impl FnOnce() -> R) -> std::thread::Result<R> {
    let outer = TRAPPING.with(|t| t.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    TRAPPING.with(|t| t.set(outer));
    result
}

fn parse_failure<T: Default>(message: &str) -> Resolved<T> {
    log::debug!("configuration parse failed: {}", message);
    Resolved::with_error(T::default(), new_error(format!("parse error ({})", message)))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
