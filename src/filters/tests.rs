//! Tests for filter construction and composition.

use super::*;
use crate::event::{EVENT_PULL_REQUEST, EVENT_PUSH, EventContext};
use crate::inputs::{Config, SvgoVersion};
use crate::test_support::StaticHost;
use serde_json::Value;

fn config_with_ignores(ignores: &[&str]) -> Config {
    Config {
        ignore_globs: ignores.iter().map(|s| s.to_string()).collect(),
        is_dry_run: false,
        svgo_config_path: "svgo.config.js".to_string(),
        svgo_version: SvgoVersion::V2,
    }
}

fn event(name: &str) -> EventContext {
    EventContext::new(name, Value::Null)
}

// =========================================================================
// Individual filters
// =========================================================================

#[test]
fn test_glob_ignore_filter_single_level() {
    let filter = glob_ignore_filter("foo/*").value;

    assert!(!filter.accepts("foo/bar.svg"));
    assert!(filter.accepts("foobar.svg"));
    // `*` does not cross directories.
    assert!(filter.accepts("foo/nested/bar.svg"));
}

#[test]
fn test_glob_ignore_filter_recursive() {
    let filter = glob_ignore_filter("vendor/**").value;

    assert!(!filter.accepts("vendor/a.svg"));
    assert!(!filter.accepts("vendor/x/y/a.svg"));
    assert!(filter.accepts("src/vendor.svg"));
}

#[test]
fn test_invalid_glob_keeps_everything_and_reports() {
    let resolved = glob_ignore_filter("icons/[");

    assert!(resolved.value.accepts("icons/a.svg"));
    let err = resolved.error.unwrap();
    assert!(err.contains("invalid ignore glob 'icons/['"));
}

#[test]
fn test_extension_filter() {
    let filter = extension_filter();

    assert!(filter.accepts("a.svg"));
    assert!(filter.accepts("icons/deep/b.svg"));
    assert!(!filter.accepts("a.SVG"));
    assert!(!filter.accepts("a.svgz"));
    assert!(!filter.accepts("a.png"));
    assert!(!filter.accepts("svg"));
    assert!(!filter.accepts(".svg"));
}

#[test]
fn test_chain_is_logical_and() {
    let mut chain = FilterChain::new();
    assert!(chain.accepts("anything"));

    chain.push(Filter::new("not-a", |p| !p.starts_with('a')));
    chain.push(Filter::in_set("listed", vec!["b.svg".to_string(), "a.svg".to_string()]));

    assert!(chain.accepts("b.svg"));
    assert!(!chain.accepts("a.svg"));
    assert!(!chain.accepts("c.svg"));
    assert_eq!(chain.worklist(["a.svg", "b.svg", "c.svg"]), vec!["b.svg"]);
}

// =========================================================================
// Factory
// =========================================================================

#[test]
fn test_get_filters_order_without_event_filter() {
    let host = StaticHost::default();
    let config = config_with_ignores(&["vendor/**", "docs/*"]);

    let resolved = get_filters(&host, &config, &event("workflow_dispatch"));

    assert!(resolved.is_ok());
    let names: Vec<&str> = resolved.value.iter().map(Filter::name).collect();
    assert_eq!(names, vec!["ignore vendor/**", "ignore docs/*", "extension"]);
}

#[test]
fn test_get_filters_push_event() {
    let host = StaticHost::pushed(&["icons/a.svg", "README.md", "vendor/b.svg"]);
    let config = config_with_ignores(&["vendor/**"]);

    let resolved = get_filters(&host, &config, &event(EVENT_PUSH));

    assert!(resolved.is_ok());
    assert_eq!(resolved.value.len(), 3);
    let worklist = resolved.value.worklist([
        "icons/a.svg",
        "icons/untouched.svg",
        "README.md",
        "vendor/b.svg",
    ]);
    assert_eq!(worklist, vec!["icons/a.svg"]);
}

#[test]
fn test_get_filters_pull_request_event() {
    let host = StaticHost::pull_request(&["logo.svg"]);
    let config = config_with_ignores(&[]);

    let resolved = get_filters(&host, &config, &event(EVENT_PULL_REQUEST));

    assert!(resolved.is_ok());
    assert_eq!(
        resolved.value.worklist(["logo.svg", "other.svg"]),
        vec!["logo.svg"]
    );
}

#[test]
fn test_get_filters_other_event_keeps_every_svg() {
    let host = StaticHost::failing("should not be queried");
    let config = config_with_ignores(&[]);

    let resolved = get_filters(&host, &config, &event("schedule"));

    assert!(resolved.is_ok());
    assert_eq!(
        resolved.value.worklist(["a.svg", "b/c.svg", "d.txt"]),
        vec!["a.svg", "b/c.svg"]
    );
}

#[test]
fn test_get_filters_host_failure_degrades_to_never_match() {
    let host = StaticHost::failing("API rate limit exceeded");
    let config = config_with_ignores(&["vendor/**"]);

    let resolved = get_filters(&host, &config, &event(EVENT_PUSH));

    assert_eq!(resolved.error.as_deref(), Some("API rate limit exceeded"));
    assert_eq!(resolved.value.len(), 3);
    assert!(resolved.value.worklist(["a.svg", "b.svg"]).is_empty());
}

#[test]
fn test_get_filters_combines_glob_and_host_errors() {
    let host = StaticHost::failing("boom");
    let config = config_with_ignores(&["[", "ok/**"]);

    let resolved = get_filters(&host, &config, &event(EVENT_PULL_REQUEST));

    let err = resolved.error.unwrap();
    assert!(err.starts_with("invalid ignore glob '['"));
    assert!(err.ends_with(",boom"));
}
