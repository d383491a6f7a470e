//! Host queries for the files an event touched.
//!
//! [`HostApi`] is the seam the filter factory queries. [`GitHost`] answers
//! it from the local clone, using the commit SHAs carried by the event
//! payload instead of a network API.

use crate::event::{EventContext, NULL_SHA};
use crate::git;
use std::path::PathBuf;

/// Changed-file queries against the hosting platform.
///
/// Errors are human-readable messages and are surfaced once, unchanged.
pub trait HostApi {
    /// Files in the pull request described by `event`.
    fn list_pull_request_files(&self, event: &EventContext) -> Result<Vec<String>, String>;

    /// Files touched by the commit(s) pushed in `event`.
    fn list_pushed_files(&self, event: &EventContext) -> Result<Vec<String>, String>;
}

/// A host backed by a local git repository.
#[derive(Debug, Clone)]
pub struct GitHost {
    repo_root: PathBuf,
}

impl GitHost {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }
}

impl HostApi for GitHost {
    fn list_pull_request_files(&self, event: &EventContext) -> Result<Vec<String>, String> {
        let (base, head) = event
            .pull_request_range()
            .ok_or_else(|| "event payload has no pull request base/head SHAs".to_string())?;

        git::changed_files(&self.repo_root, base, head, true).map_err(|e| e.to_string())
    }

    fn list_pushed_files(&self, event: &EventContext) -> Result<Vec<String>, String> {
        let (before, after) = event
            .push_range()
            .ok_or_else(|| "event payload has no push before/after SHAs".to_string())?;

        // A new branch has no "before"; fall back to the head commit alone.
        let files = if before == NULL_SHA {
            git::commit_files(&self.repo_root, after)
        } else {
            git::changed_files(&self.repo_root, before, after, false)
        };
        files.map_err(|e| e.to_string())
    }
}
