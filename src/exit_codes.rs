//! Exit code constants for the svgplan CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable event payload)
//! - 2: A hard failure reported by the action manager
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid invocation environment.
pub const USER_ERROR: i32 = 1;

/// The run was failed through the action manager (malformed inputs in strict
/// mode, a failed changed-file query, ...).
pub const ACTION_FAILURE: i32 = 2;

/// Git operation failure: listing tracked or changed files failed.
pub const GIT_FAILURE: i32 = 3;
