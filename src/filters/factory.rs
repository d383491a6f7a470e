//! Building the filter chain for one run.

use super::chain::{Filter, FilterChain};
use crate::event::{EVENT_PULL_REQUEST, EVENT_PUSH, EventContext};
use crate::host::HostApi;
use crate::inputs::Config;
use crate::outcome::{Resolved, combine, new_error};
use globset::GlobBuilder;
use std::path::Path;

/// Extension of files eligible for optimization (exact, lowercase).
const SVG_EXTENSION: &str = "svg";

/// Build the filter chain for `config` and `event`.
///
/// Order: one glob filter per ignore pattern, the extension filter, then at
/// most one changed-file filter. If the host query fails, a never-matching
/// filter stands in for it and the host's error is returned as is; the
/// chain is returned either way.
pub fn get_filters(
    host: &dyn HostApi,
    config: &Config,
    event: &EventContext,
) -> Resolved<FilterChain> {
    let mut chain = FilterChain::new();
    let mut errors = Vec::new();

    for pattern in &config.ignore_globs {
        let (filter, error) = glob_ignore_filter(pattern).into_parts();
        chain.push(filter);
        errors.push(error);
    }

    chain.push(extension_filter());

    let changed = match event.event_name.as_str() {
        EVENT_PULL_REQUEST => Some(host.list_pull_request_files(event)),
        EVENT_PUSH => Some(host.list_pushed_files(event)),
        _ => None,
    };

    match changed {
        Some(Ok(files)) => {
            log::debug!("{} event changed {} file(s)", event.event_name, files.len());
            chain.push(Filter::in_set(event.event_name.as_str(), files));
        }
        Some(Err(e)) => {
            log::debug!("could not list changed files: {}", e);
            chain.push(Filter::never(event.event_name.as_str()));
            errors.push(new_error(e));
        }
        None => {
            log::debug!("no changed-file filter for '{}' events", event.event_name);
        }
    }

    Resolved::with_error(chain, combine(errors))
}

/// A filter rejecting paths that match `pattern`.
///
/// `*` does not cross `/`; use `**` for that. A pattern that does not
/// compile yields a filter keeping every path, plus an error.
pub fn glob_ignore_filter(pattern: &str) -> Resolved<Filter> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build();

    match glob {
        Ok(glob) => {
            let matcher = glob.compile_matcher();
            Resolved::ok(Filter::new(format!("ignore {}", pattern), move |path| {
                !matcher.is_match(path)
            }))
        }
        Err(e) => Resolved::with_error(
            Filter::new(format!("ignore {}", pattern), |_| true),
            new_error(format!("invalid ignore glob '{}': {}", pattern, e)),
        ),
    }
}

/// A filter keeping paths with an `.svg` extension.
pub fn extension_filter() -> Filter {
    Filter::new("extension", |path| {
        Path::new(path)
            .extension()
            .is_some_and(|ext| ext == SVG_EXTENSION)
    })
}
