//! Integration tests for configuration building.
//!
//! These tests verify the declarative output of the builder against the
//! documented structural facts: one stderr handler, non-propagating
//! component entries, non-destructive application, and deterministic output.

use config::{DEFAULT_DATE_FORMAT, DEFAULT_MESSAGE_FORMAT, HandlerTarget, build, build_with_formats};
use spec::{Severity, parse};

// ============================================================================
// Structural Fact Tests
// ============================================================================

/// Verifies the end-to-end example produces the documented description.
#[test]
fn full_specification_builds_the_documented_description() {
    let specification = parse("warn,myapp=info,myapp.db=debug,requests=error").unwrap();
    let description = build(&specification);

    assert_eq!(description.default_severity(), Severity::Warning);

    let entries: Vec<(&str, Severity, bool)> = description
        .loggers()
        .iter()
        .map(|logger| (logger.name().as_str(), logger.severity(), logger.propagate()))
        .collect();
    assert_eq!(
        entries,
        [
            ("myapp", Severity::Info, false),
            ("myapp.db", Severity::Debug, false),
            ("requests", Severity::Error, false),
        ]
    );

    assert_eq!(description.handler().target(), HandlerTarget::Stderr);
    assert!(!description.disable_existing());
}

/// Verifies an empty specification builds a root-only description.
#[test]
fn empty_specification_builds_root_only() {
    let description = build(&parse("").unwrap());

    assert_eq!(description.default_severity(), Severity::Warning);
    assert!(description.loggers().is_empty());
}

/// Verifies the resolved templates contain the documented fields.
#[test]
fn default_templates_carry_the_documented_fields() {
    for escape in ["%t", "%l", "%n", "%m"] {
        assert!(
            DEFAULT_MESSAGE_FORMAT.contains(escape),
            "missing {escape} in default message format"
        );
    }
    for escape in ["%Y", "%m", "%d", "%H", "%M", "%S"] {
        assert!(
            DEFAULT_DATE_FORMAT.contains(escape),
            "missing {escape} in default date format"
        );
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Verifies building twice from one parse yields equal descriptions.
#[test]
fn build_is_idempotent_over_a_specification() {
    let specification = parse("debug,myapp=trace").unwrap();
    assert_eq!(build(&specification), build(&specification));
}

/// Verifies parse-then-build is deterministic end to end.
#[test]
fn parse_then_build_is_deterministic() {
    let input = "warn,myapp=info,myapp.db=debug,requests=error";
    let first = build(&parse(input).unwrap());
    let second = build(&parse(input).unwrap());
    assert_eq!(first, second);
}

/// Verifies token order does not change the built description when the
/// resulting specification is equal.
#[test]
fn token_order_is_irrelevant() {
    let first = build(&parse("warn,a=debug,b=info").unwrap());
    let second = build(&parse("b=info,a=debug,warn").unwrap());
    assert_eq!(first, second);
}

// ============================================================================
// Format Override Tests
// ============================================================================

/// Verifies overrides land in the handler description unchanged.
#[test]
fn format_overrides_are_passed_through() {
    let specification = parse("info").unwrap();
    let description =
        build_with_formats(&specification, Some("%n [%l] %m"), Some("%H:%M:%S"));

    assert_eq!(description.handler().message_format(), "%n [%l] %m");
    assert_eq!(description.handler().date_format(), "%H:%M:%S");
}

/// Verifies a single override leaves the other template at its default.
#[test]
fn partial_overrides_keep_the_other_default() {
    let specification = parse("info").unwrap();
    let description = build_with_formats(&specification, Some("%m"), None);

    assert_eq!(description.handler().message_format(), "%m");
    assert_eq!(description.handler().date_format(), DEFAULT_DATE_FORMAT);
}
