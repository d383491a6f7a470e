//! Path-inclusion filters for svgplan.
//!
//! The worklist is every candidate path accepted by all filters of a
//! [`FilterChain`]:
//! - one glob filter per `ignore` pattern (reject matching paths)
//! - an extension filter (keep `.svg` only)
//! - for `push` and `pull_request` events, a changed-file filter built from
//!   a [`crate::host::HostApi`] query

mod chain;
mod factory;

#[cfg(test)]
mod tests;

pub use chain::{Filter, FilterChain};
pub use factory::{extension_filter, get_filters, glob_ignore_filter};
