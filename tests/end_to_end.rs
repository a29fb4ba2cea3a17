//! End-to-end tests over the pure pipeline: specification text through
//! parsing and building, without touching the process-wide facade.

use envlog::{HandlerTarget, Severity, build, parse};

/// Verifies the documented end-to-end example in full.
#[test]
fn documented_example_materializes_correctly() {
    let parsed = parse("warn,myapp=info,myapp.db=debug,requests=error").unwrap();
    let description = build(&parsed);

    assert_eq!(description.default_severity(), Severity::Warning);

    let entries: Vec<(&str, Severity)> = description
        .loggers()
        .iter()
        .map(|logger| (logger.name().as_str(), logger.severity()))
        .collect();
    assert_eq!(
        entries,
        [
            ("myapp", Severity::Info),
            ("myapp.db", Severity::Debug),
            ("requests", Severity::Error),
        ]
    );

    // All entries share the single stderr handler and none propagate.
    assert_eq!(description.handler().target(), HandlerTarget::Stderr);
    assert!(description.loggers().iter().all(|logger| !logger.propagate()));
    assert!(!description.disable_existing());
}

/// Verifies severity resolution through the built description.
#[test]
fn effective_severities_follow_the_hierarchy() {
    let description = build(&parse("warn,myapp=info,myapp.db=debug,requests=error").unwrap());

    assert_eq!(description.effective_severity("myapp"), Severity::Info);
    assert_eq!(description.effective_severity("myapp.db"), Severity::Debug);
    assert_eq!(
        description.effective_severity("myapp.db.pool"),
        Severity::Debug
    );
    assert_eq!(description.effective_severity("myapp.api"), Severity::Info);
    assert_eq!(description.effective_severity("requests"), Severity::Error);
    assert_eq!(description.effective_severity("unrelated"), Severity::Warning);
}

/// Verifies the whole pipeline is deterministic.
#[test]
fn pipeline_is_deterministic() {
    let input = "warn,myapp=info,myapp.db=debug,requests=error";

    let first = build(&parse(input).unwrap());
    let second = build(&parse(input).unwrap());
    assert_eq!(first, second);
}

/// Verifies parse failures carry the documented messages to the caller.
#[test]
fn parse_failures_surface_with_messages() {
    let error = parse("info,info").unwrap_err();
    assert_eq!(error.to_string(), "only one default level allowed");

    let error = parse("myapp=bogus").unwrap_err();
    assert_eq!(error.to_string(), "unrecognized log level `bogus`");
}
