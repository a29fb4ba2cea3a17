//! crates/config/src/builder.rs
//! Builds configuration descriptions from parsed specifications.

use spec::Specification;

use crate::description::{
    ConfigurationDescription, HandlerDescription, HandlerTarget, LoggerDescription,
};

/// Default message format template.
///
/// Percent escapes: `%t` timestamp, `%l` severity name left-justified to
/// eight characters, `%n` logger name, `%m` message. `%%` is a literal `%`.
pub const DEFAULT_MESSAGE_FORMAT: &str = "%t %l %n %m";

/// Default date format template (`1970-01-01 00:00:00` style).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds a configuration description with the default format templates.
///
/// Equivalent to [`build_with_formats`] with no overrides. Never fails for a
/// parser-produced specification.
#[must_use]
pub fn build(specification: &Specification) -> ConfigurationDescription {
    build_with_formats(specification, None, None)
}

/// Builds a configuration description with optional format overrides.
///
/// `message_format` and `date_format` replace [`DEFAULT_MESSAGE_FORMAT`] and
/// [`DEFAULT_DATE_FORMAT`] when supplied. The description contains one
/// stderr handler using the resolved formats, a root entry at the
/// specification's default severity, and one non-propagating entry per
/// component override, all attached to the same handler.
#[must_use]
pub fn build_with_formats(
    specification: &Specification,
    message_format: Option<&str>,
    date_format: Option<&str>,
) -> ConfigurationDescription {
    let handler = HandlerDescription::new(
        HandlerTarget::Stderr,
        message_format.unwrap_or(DEFAULT_MESSAGE_FORMAT).to_owned(),
        date_format.unwrap_or(DEFAULT_DATE_FORMAT).to_owned(),
    );

    let loggers = specification
        .components()
        .iter()
        .map(|(name, severity)| LoggerDescription::new(name.clone(), *severity))
        .collect();

    ConfigurationDescription::new(specification.default_severity(), loggers, handler)
}
