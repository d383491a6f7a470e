//! Error values and the `(value, error)` pairs built on them.
//!
//! An error here is a nullable message: `None` is success and `Some(msg)` is
//! a human-readable failure. Resolvers, parsers and the filter factory never
//! return without a usable value, so their results are [`Resolved`] pairs
//! rather than `Result`s.

/// Separator used when several error messages are merged.
const SEPARATOR: &str = ",";

/// Build a non-null error from a message.
pub fn new_error(msg: impl Into<String>) -> Option<String> {
    Some(msg.into())
}

/// Merge zero or more errors into one.
///
/// `None` entries are dropped. If nothing remains the result is `None`,
/// otherwise the remaining messages are joined with `,` in argument order.
///
/// ```
/// use svgplan::outcome::{combine, new_error};
///
/// assert_eq!(combine([None, None]), None);
/// assert_eq!(combine([None, new_error("a")]), new_error("a"));
/// assert_eq!(combine([new_error("a"), new_error("b")]), new_error("a,b"));
/// ```
pub fn combine<I>(errors: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let messages: Vec<String> = errors.into_iter().flatten().collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(SEPARATOR))
    }
}

/// A value that is always usable, paired with an optional error.
///
/// On failure `value` holds a best-effort fallback instead of being absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub error: Option<String>,
}

impl<T> Resolved<T> {
    /// A fully-populated value with no error.
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// A fallback value alongside an (optional) error.
    pub fn with_error(value: T, error: Option<String>) -> Self {
        Self { value, error }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Transform the value, keeping the error.
    pub fn map<U, F>(self, f: F) -> Resolved<U>
    where
        F: FnOnce(T) -> U,
    {
        Resolved {
            value: f(self.value),
            error: self.error,
        }
    }

    pub fn into_parts(self) -> (T, Option<String>) {
        (self.value, self.error)
    }
}
