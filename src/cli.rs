//! CLI argument parsing for svgplan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// svgplan: decide what an SVG optimization job should work on.
///
/// Resolves the job's inputs, selects the SVG files touched by the
/// triggering event, and parses the optimizer configuration, without ever
/// crashing on malformed user input.
#[derive(Parser, Debug)]
#[command(name = "svgplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for svgplan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan an optimization run.
    ///
    /// Reads inputs from INPUT_* environment variables (and --input
    /// overrides), loads the triggering event, and prints the worklist of
    /// SVG files to optimize.
    Plan(PlanArgs),

    /// Parse an optimizer configuration file.
    ///
    /// Prints the parsed options as JSON, or the parse error.
    CheckConfig(CheckConfigArgs),
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Repository to plan for (defaults to the current directory).
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Event name (defaults to GITHUB_EVENT_NAME).
    #[arg(long)]
    pub event_name: Option<String>,

    /// Event payload JSON file (defaults to GITHUB_EVENT_PATH).
    #[arg(long, requires = "event_name")]
    pub event_path: Option<PathBuf>,

    /// Input override as NAME=VALUE (repeatable). Use \n for multiline values.
    #[arg(short, long = "input", value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// Print the whole plan as JSON instead of one path per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check-config` command.
#[derive(Parser, Debug)]
pub struct CheckConfigArgs {
    /// Path to the optimizer configuration file.
    pub path: PathBuf,

    /// Optimizer major version selecting the parse strategy.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub svgo_version: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
