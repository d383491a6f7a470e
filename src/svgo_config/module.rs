//! Evaluation of module-style optimizer configuration.
//!
//! A module body exports one value, either through `module.exports = ...`,
//! `export default ...`, or as a bare expression. The exported expression
//! must be a literal: JSON5 syntax (unquoted keys, single quotes, trailing
//! commas, comments) extended with regular expression literals.
//!
//! A regular expression literal `/pattern/flags` evaluates to the object
//! `{"regex": "pattern", "flags": "flags"}`. Identifiers, function calls and
//! other executable constructs are rejected.

use regex::Regex;
use serde_json::{Value, json};
use std::sync::LazyLock;
use thiserror::Error;

/// Leading comments, a `"use strict"` directive, then the export keyword.
static EXPORT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:\s+|//[^\n]*|/\*(?s:.*?)\*/|(?:'use strict'|"use strict");?)*(?:module\.exports\s*=|export\s+default\b)"#,
    )
    .expect("Invalid export header regex")
});

/// Errors raised while evaluating a configuration module.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("unterminated string literal at offset {0}")]
    UnterminatedString(usize),

    #[error("unterminated comment at offset {0}")]
    UnterminatedComment(usize),

    #[error("unterminated regular expression literal at offset {0}")]
    UnterminatedRegex(usize),

    #[error("{0}")]
    Syntax(#[from] json5::Error),
}

/// Evaluate a module body and return its exported value.
pub fn evaluate_module(raw: &str) -> Result<Value, ModuleError> {
    let body = match EXPORT_HEADER.find(raw) {
        Some(header) => &raw[header.end()..],
        None => raw,
    };

    // The exported expression starts right after the header, so a leading
    // `/` is a regex literal.
    let source = rewrite_regex_literals(body)?;
    let expression = source.trim();
    let expression = expression.strip_suffix(';').unwrap_or(expression).trim_end();

    Ok(json5::from_str(expression)?)
}

/// Replace every regular expression literal with its object form and drop
/// comments.
///
/// Strings are copied through untouched so slashes inside them are never
/// mistaken for literals. A block comment becomes a single space.
fn rewrite_regex_literals(raw: &str) -> Result<String, ModuleError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut last_significant: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '"' || c == '\'' || c == '`' {
            let end = skip_string(&chars, i)?;
            out.extend(&chars[i..end]);
            last_significant = Some(c);
            i = end;
        } else if c == '/' && next == Some('/') {
            i = chars[i..]
                .iter()
                .position(|&ch| ch == '\n')
                .map_or(chars.len(), |offset| i + offset);
        } else if c == '/' && next == Some('*') {
            i = skip_block_comment(&chars, i)?;
            out.push(' ');
        } else if c == '/' && starts_expression(last_significant) {
            let (pattern, flags, end) = read_regex(&chars, i)?;
            out.push_str(&json!({ "regex": pattern, "flags": flags }).to_string());
            last_significant = Some('}');
            i = end;
        } else {
            out.push(c);
            if !c.is_whitespace() {
                last_significant = Some(c);
            }
            i += 1;
        }
    }

    Ok(out)
}

/// Whether a `/` after `prev` begins a value rather than a division.
fn starts_expression(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => matches!(
            c,
            '(' | ',' | '=' | ':' | '[' | '!' | '&' | '|' | '?' | '{' | ';'
        ),
    }
}

/// Returns the index just past the closing quote.
fn skip_string(chars: &[char], start: usize) -> Result<usize, ModuleError> {
    let quote = chars[start];
    let mut j = start + 1;
    while j < chars.len() {
        match chars[j] {
            '\\' => j += 2,
            '\n' if quote != '`' => break,
            ch if ch == quote => return Ok(j + 1),
            _ => j += 1,
        }
    }
    Err(ModuleError::UnterminatedString(start))
}

/// Returns the index just past the closing `*/`.
fn skip_block_comment(chars: &[char], start: usize) -> Result<usize, ModuleError> {
    let mut j = start + 2;
    while j + 1 < chars.len() {
        if chars[j] == '*' && chars[j + 1] == '/' {
            return Ok(j + 2);
        }
        j += 1;
    }
    Err(ModuleError::UnterminatedComment(start))
}

/// Read `/pattern/flags` starting at the opening slash.
fn read_regex(chars: &[char], start: usize) -> Result<(String, String, usize), ModuleError> {
    let mut pattern = String::new();
    let mut in_class = false;
    let mut j = start + 1;

    loop {
        let Some(&ch) = chars.get(j) else {
            return Err(ModuleError::UnterminatedRegex(start));
        };
        match ch {
            '\n' => return Err(ModuleError::UnterminatedRegex(start)),
            '\\' => {
                pattern.push(ch);
                if let Some(&escaped) = chars.get(j + 1) {
                    pattern.push(escaped);
                }
                j += 2;
                continue;
            }
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => break,
            _ => {}
        }
        pattern.push(ch);
        j += 1;
    }

    // Skip the closing slash, then collect flags.
    j += 1;
    let mut flags = String::new();
    while let Some(&ch) = chars.get(j) {
        if !ch.is_ascii_alphabetic() {
            break;
        }
        flags.push(ch);
        j += 1;
    }

    Ok((pattern, flags, j))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_keeps_strings_and_drops_comments() {
        let src = "{ a: 'x/y', // c/d\n b: \"/e/\" /* f/g */ }";
        assert_eq!(
            rewrite_regex_literals(src).unwrap(),
            "{ a: 'x/y', \n b: \"/e/\"   }"
        );
    }

    #[test]
    fn test_rewrite_regex_at_start_of_expression() {
        let out = rewrite_regex_literals(" /a/").unwrap();
        assert_eq!(out, r#" {"flags":"","regex":"a"}"#);
    }

    #[test]
    fn test_rewrite_regex_in_value_position() {
        let out = rewrite_regex_literals("{ re: /a\\/b[/]/gi }").unwrap();
        assert_eq!(out, r#"{ re: {"flags":"gi","regex":"a\\/b[/]"} }"#);
    }

    #[test]
    fn test_unterminated_regex() {
        let err = rewrite_regex_literals("{ re: /abc\n }").unwrap_err();
        assert!(matches!(err, ModuleError::UnterminatedRegex(6)));
    }

    #[test]
    fn test_unterminated_string() {
        let err = rewrite_regex_literals("{ a: 'abc }").unwrap_err();
        assert!(matches!(err, ModuleError::UnterminatedString(5)));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = rewrite_regex_literals("{ /* a }").unwrap_err();
        assert!(matches!(err, ModuleError::UnterminatedComment(2)));
    }
}
