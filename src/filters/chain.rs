//! Filters and their AND-composition.

use std::collections::HashSet;
use std::fmt;

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A named, stateless path predicate: `true` means "include this path".
pub struct Filter {
    name: String,
    predicate: Predicate,
}

impl Filter {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Keep exactly the paths in `paths`.
    pub fn in_set(name: impl Into<String>, paths: Vec<String>) -> Self {
        let set: HashSet<String> = paths.into_iter().collect();
        Self::new(name, move |path| set.contains(path))
    }

    /// Keep nothing. Stands in for a filter that could not be built.
    pub fn never(name: impl Into<String>) -> Self {
        Self::new(name, |_| false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepts(&self, path: &str) -> bool {
        (self.predicate)(path)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("name", &self.name).finish()
    }
}

/// An ordered list of filters, combined by logical AND.
///
/// Evaluation short-circuits in order; every path is evaluated on its own.
#[derive(Debug, Default)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    /// Whether every filter accepts `path`.
    pub fn accepts(&self, path: &str) -> bool {
        self.filters.iter().all(|filter| filter.accepts(path))
    }

    /// The accepted subset of `paths`, in input order.
    pub fn worklist<I, S>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .filter(|path| self.accepts(path.as_ref()))
            .map(|path| path.as_ref().to_string())
            .collect()
    }
}
