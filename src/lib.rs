//! svgplan: planning for SVG optimization jobs.
//!
//! Given the inputs of a job and the repository event that triggered it,
//! svgplan resolves a typed [`inputs::Config`], selects the SVG files the
//! event touched through a [`filters::FilterChain`], and parses the
//! optimizer configuration with parsers that never fail. Problems are
//! routed through an [`actions::ActionManager`] that decides between a
//! warning and a hard failure.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod error;
pub mod event;
pub mod exit_codes;
pub mod filters;
pub mod git;
pub mod host;
pub mod inputs;
pub mod logging;
pub mod outcome;
pub mod svgo_config;

#[cfg(test)]
pub(crate) mod test_support;
