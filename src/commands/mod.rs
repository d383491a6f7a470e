//! Command implementations for svgplan.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check_config;
pub mod plan;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Plan(args) => plan::cmd_plan(args),
        Command::CheckConfig(args) => check_config::cmd_check_config(args),
    }
}
