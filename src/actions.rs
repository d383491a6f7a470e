//! Conditional failure policy.
//!
//! Every fallible step of a run ends up here. A [`Condition`] is either a
//! plain boolean or an error value; [`ActionManager`] turns triggered
//! conditions into hard failures or warnings depending on strict mode.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

/// Something that may trigger a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Triggers when `true`.
    Bool(bool),
    /// Triggers when an error is present.
    Error(Option<String>),
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Bool(value)
    }
}

impl From<Option<String>> for Condition {
    fn from(error: Option<String>) -> Self {
        Condition::Error(error)
    }
}

impl From<&Option<String>> for Condition {
    fn from(error: &Option<String>) -> Self {
        Condition::Error(error.clone())
    }
}

impl Condition {
    pub fn is_triggered(&self) -> bool {
        match self {
            Condition::Bool(b) => *b,
            Condition::Error(e) => e.is_some(),
        }
    }
}

/// Run `f` once if `condition` triggers. Returns whether it ran.
pub fn run_if<F: FnOnce()>(condition: impl Into<Condition>, f: F) -> bool {
    let triggered = condition.into().is_triggered();
    if triggered {
        f();
    }
    triggered
}

/// Sink for user-visible failures and warnings.
pub trait Reporter {
    fn fail(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Prints each message once as `Error: ...` or `Warning: ...`, to stderr
/// by default.
///
/// Remembers whether anything failed so the caller can abort.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = io::Stderr> {
    out: RefCell<W>,
    failed: Cell<bool>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            failed: Cell::new(false),
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failed.get()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, label: &str, msg: &str) {
        log::debug!("{}: {}", label, msg);
        let _ = writeln!(self.out.borrow_mut(), "{}: {}", label, msg);
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn fail(&self, msg: &str) {
        self.failed.set(true);
        self.emit("Error", msg);
    }

    fn warn(&self, msg: &str) {
        self.emit("Warning", msg);
    }
}

/// Routes triggered conditions to a reporter.
pub struct ActionManager<'a> {
    strict: bool,
    reporter: &'a dyn Reporter,
}

impl<'a> ActionManager<'a> {
    pub fn new(strict: bool, reporter: &'a dyn Reporter) -> Self {
        Self { strict, reporter }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Fail with `msg` if `condition` triggers.
    ///
    /// Returns whether a failure was reported.
    pub fn fail_if(&self, condition: impl Into<Condition>, msg: &str) -> bool {
        run_if(condition, || self.reporter.fail(msg))
    }

    /// Fail (strict mode) or warn with `msg` if `condition` triggers.
    ///
    /// Returns whether a failure was reported; a warning does not count.
    pub fn strict_fail_if(&self, condition: impl Into<Condition>, msg: &str) -> bool {
        let triggered = run_if(condition, || {
            if self.strict {
                self.reporter.fail(msg);
            } else {
                self.reporter.warn(msg);
            }
        });
        triggered && self.strict
    }
}
