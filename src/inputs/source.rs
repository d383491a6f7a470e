//! Input sources and type coercion.
//!
//! A source answers every read with an [`InputProbe`]: the input is absent,
//! present but not coercible to the requested type, or present and valid.

use std::collections::BTreeMap;

const TRUE_VALUES: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_VALUES: [&str; 3] = ["false", "False", "FALSE"];

/// Outcome of reading one input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputProbe<T> {
    /// The input was not supplied (or was blank).
    Absent,
    /// The input was supplied but could not be coerced; carries the reason.
    Invalid(String),
    /// The input was supplied and coerced successfully.
    Valid(T),
}

impl<T> InputProbe<T> {
    /// Chain a coercion onto a present, valid input.
    pub fn and_then<U, F>(self, f: F) -> InputProbe<U>
    where
        F: FnOnce(T) -> InputProbe<U>,
    {
        match self {
            InputProbe::Absent => InputProbe::Absent,
            InputProbe::Invalid(reason) => InputProbe::Invalid(reason),
            InputProbe::Valid(value) => f(value),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, InputProbe::Absent)
    }
}

/// A capability providing named, typed configuration values.
///
/// Implementors only have to provide [`InputSource::get_input`]; the typed
/// reads are layered on it with the hosting platform's coercion rules.
pub trait InputSource {
    /// Read an input as trimmed text. Blank text counts as absent.
    fn get_input(&self, name: &str) -> InputProbe<String>;

    /// Read a boolean input (`true | True | TRUE | false | False | FALSE`).
    fn get_boolean_input(&self, name: &str) -> InputProbe<bool> {
        self.get_input(name).and_then(|raw| parse_boolean(name, &raw))
    }

    /// Read a multiline input: one trimmed entry per non-blank line.
    fn get_multiline_input(&self, name: &str) -> InputProbe<Vec<String>> {
        self.get_input(name)
            .and_then(|raw| InputProbe::Valid(split_lines(&raw)))
    }

    /// Read a decimal input.
    fn get_decimal_input(&self, name: &str) -> InputProbe<f64> {
        self.get_input(name).and_then(|raw| parse_decimal(name, &raw))
    }
}

fn parse_boolean(name: &str, raw: &str) -> InputProbe<bool> {
    if TRUE_VALUES.contains(&raw) {
        InputProbe::Valid(true)
    } else if FALSE_VALUES.contains(&raw) {
        InputProbe::Valid(false)
    } else {
        InputProbe::Invalid(format!(
            "Input does not meet YAML 1.2 \"Core Schema\" specification: {}",
            name
        ))
    }
}

fn parse_decimal(name: &str, raw: &str) -> InputProbe<f64> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => InputProbe::Valid(n),
        _ => InputProbe::Invalid(format!("Input is not a number: {}", name)),
    }
}

fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn probe_text(raw: Option<&str>) -> InputProbe<String> {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => InputProbe::Valid(text.to_string()),
        _ => InputProbe::Absent,
    }
}

/// Reads inputs from `INPUT_<NAME>` environment variables.
///
/// The name is upper-cased and spaces become underscores; hyphens are kept,
/// so `dry-run` is read from `INPUT_DRY-RUN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputSource;

impl EnvInputSource {
    /// Environment variable holding the given input.
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputSource {
    fn get_input(&self, name: &str) -> InputProbe<String> {
        let value = std::env::var(Self::variable_name(name)).ok();
        probe_text(value.as_deref())
    }
}

/// In-memory inputs, keyed by input name.
#[derive(Debug, Clone, Default)]
pub struct MapInputSource {
    values: BTreeMap<String, String>,
}

impl MapInputSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Parse a `NAME=VALUE` assignment, as given on the command line.
    ///
    /// Literal `\n` sequences in the value become newlines so multiline
    /// inputs can be passed as a single argument.
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<(), String> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", assignment))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing input name in '{}'", assignment));
        }
        self.insert(name, value.replace("\\n", "\n"));
        Ok(())
    }
}

impl InputSource for MapInputSource {
    fn get_input(&self, name: &str) -> InputProbe<String> {
        probe_text(self.values.get(name).map(String::as_str))
    }
}

/// Two sources stacked: `overrides` wins whenever it has the input.
pub struct LayeredInputSource<'a> {
    overrides: &'a dyn InputSource,
    base: &'a dyn InputSource,
}

impl<'a> LayeredInputSource<'a> {
    pub fn new(overrides: &'a dyn InputSource, base: &'a dyn InputSource) -> Self {
        Self { overrides, base }
    }
}

impl InputSource for LayeredInputSource<'_> {
    fn get_input(&self, name: &str) -> InputProbe<String> {
        match self.overrides.get_input(name) {
            InputProbe::Absent => self.base.get_input(name),
            probe => probe,
        }
    }
}
