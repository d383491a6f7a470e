//! Repository event context.
//!
//! The event that triggered a run is identified by its name
//! (`GITHUB_EVENT_NAME`) and described by a JSON payload whose path is given
//! by `GITHUB_EVENT_PATH`. Only the fields the changed-file queries need are
//! read from the payload; everything else is kept as raw JSON.

use crate::error::{PlanError, Result};
use serde_json::Value;
use std::path::Path;

/// Event raised when a pull request is opened or updated.
pub const EVENT_PULL_REQUEST: &str = "pull_request";
/// Event raised when commits are pushed.
pub const EVENT_PUSH: &str = "push";

/// Events a run knows how to handle.
///
/// Events without a changed-file filter (dispatch, schedule) process every
/// tracked SVG.
pub const SUPPORTED_EVENTS: &[&str] = &[
    EVENT_PULL_REQUEST,
    EVENT_PUSH,
    "repository_dispatch",
    "schedule",
    "workflow_dispatch",
];

/// Environment variable holding the event name.
pub const ENV_EVENT_NAME: &str = "GITHUB_EVENT_NAME";
/// Environment variable holding the path to the event payload.
pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";

/// SHA git uses for "no commit" (e.g. `before` of a branch's first push).
pub const NULL_SHA: &str = "0000000000000000000000000000000000000000";

/// The event a run was triggered by.
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext {
    pub event_name: String,
    pub payload: Value,
}

impl EventContext {
    pub fn new(event_name: impl Into<String>, payload: Value) -> Self {
        Self {
            event_name: event_name.into(),
            payload,
        }
    }

    /// Load the event from the runner environment.
    ///
    /// A missing event name is a user error. A missing payload path yields
    /// an empty payload.
    pub fn from_env() -> Result<Self> {
        let event_name = std::env::var(ENV_EVENT_NAME).map_err(|_| {
            PlanError::UserError(format!(
                "{} is not set; pass --event-name to run outside of a workflow",
                ENV_EVENT_NAME
            ))
        })?;
        let payload_path = std::env::var(ENV_EVENT_PATH).ok();
        Self::load(event_name, payload_path.as_deref().map(Path::new))
    }

    /// Build an event from a name and an optional payload file.
    pub fn load(event_name: impl Into<String>, payload_path: Option<&Path>) -> Result<Self> {
        let payload = match payload_path {
            Some(path) => read_payload(path)?,
            None => Value::Object(Default::default()),
        };
        Ok(Self::new(event_name, payload))
    }

    /// Whether a run knows how to handle this event.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_EVENTS.contains(&self.event_name.as_str())
    }

    /// `(before, after)` SHAs of a push event.
    pub fn push_range(&self) -> Option<(&str, &str)> {
        let before = self.payload.get("before")?.as_str()?;
        let after = self.payload.get("after")?.as_str()?;
        Some((before, after))
    }

    /// `(base, head)` SHAs of a pull request event.
    pub fn pull_request_range(&self) -> Option<(&str, &str)> {
        let pr = self.payload.get("pull_request")?;
        let base = pr.pointer("/base/sha")?.as_str()?;
        let head = pr.pointer("/head/sha")?.as_str()?;
        Some((base, head))
    }

    /// Pull request number, when the payload carries one.
    pub fn pull_request_number(&self) -> Option<u64> {
        self.payload.pointer("/pull_request/number")?.as_u64()
    }
}

fn read_payload(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PlanError::UserError(format!(
            "failed to read event payload '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        PlanError::UserError(format!(
            "failed to parse event payload '{}': {}",
            path.display(),
            e
        ))
    })
}
