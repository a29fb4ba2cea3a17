//! crates/config/src/description.rs
//! Typed records describing the configuration an applicator materializes.

use spec::{ComponentName, Severity};

/// Output stream a handler writes to.
///
/// The set is closed by design: descriptions describe exactly one
/// stream-based handler on standard error. The enum keeps the wiring typed so
/// applicators match on it instead of comparing strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandlerTarget {
    /// The process's standard error stream.
    Stderr,
}

impl HandlerTarget {
    /// Returns the stream name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
        }
    }
}

/// Description of the single stream handler shared by every logger entry.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandlerDescription {
    target: HandlerTarget,
    message_format: String,
    date_format: String,
}

impl HandlerDescription {
    pub(crate) fn new(target: HandlerTarget, message_format: String, date_format: String) -> Self {
        Self {
            target,
            message_format,
            date_format,
        }
    }

    /// Stream the handler writes to.
    #[must_use]
    pub const fn target(&self) -> HandlerTarget {
        self.target
    }

    /// Resolved message format template.
    #[must_use]
    pub fn message_format(&self) -> &str {
        &self.message_format
    }

    /// Resolved date format template.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

/// One named logger entry of a configuration description.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerDescription {
    name: ComponentName,
    severity: Severity,
    propagate: bool,
}

impl LoggerDescription {
    pub(crate) const fn new(name: ComponentName, severity: Severity) -> Self {
        Self {
            name,
            severity,
            propagate: false,
        }
    }

    /// Normalized component name of the logger.
    #[must_use]
    pub const fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Severity threshold of the logger.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether records forwarded to this logger also reach ancestor loggers.
    ///
    /// Always `false` for explicitly leveled components: the entry's own
    /// severity and handler fully determine its output.
    #[must_use]
    pub const fn propagate(&self) -> bool {
        self.propagate
    }
}

/// Declarative, applier-agnostic description of a logging configuration.
///
/// The description is owned solely by the caller that requested it; the
/// builder keeps no reference after returning. Applying it to a live logging
/// facility is the applicator's job.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigurationDescription {
    default_severity: Severity,
    loggers: Vec<LoggerDescription>,
    handler: HandlerDescription,
    disable_existing: bool,
}

impl ConfigurationDescription {
    pub(crate) fn new(
        default_severity: Severity,
        loggers: Vec<LoggerDescription>,
        handler: HandlerDescription,
    ) -> Self {
        Self {
            default_severity,
            loggers,
            handler,
            disable_existing: false,
        }
    }

    /// Severity of the root logger, applied to components without overrides.
    #[must_use]
    pub const fn default_severity(&self) -> Severity {
        self.default_severity
    }

    /// Component logger entries, sorted by name.
    #[must_use]
    pub fn loggers(&self) -> &[LoggerDescription] {
        &self.loggers
    }

    /// The single handler every entry is attached to.
    #[must_use]
    pub const fn handler(&self) -> &HandlerDescription {
        &self.handler
    }

    /// Whether applying the description disables pre-existing loggers.
    ///
    /// Always `false`: application is non-destructive and leaves loggers
    /// outside this description untouched.
    #[must_use]
    pub const fn disable_existing(&self) -> bool {
        self.disable_existing
    }

    /// Resolves the severity in effect for a record target.
    ///
    /// The most specific configured component that covers `target` (on dot
    /// boundaries, after `::` separators are normalized) wins; targets
    /// outside every configured subtree fall back to the default severity.
    #[must_use]
    pub fn effective_severity(&self, target: &str) -> Severity {
        let normalized;
        let target = if target.contains("::") {
            normalized = target.replace("::", ".");
            normalized.as_str()
        } else {
            target
        };

        let mut best: Option<&LoggerDescription> = None;
        for logger in &self.loggers {
            if !logger.name().matches(target) {
                continue;
            }
            let longer = best.is_none_or(|current| {
                logger.name().as_str().len() > current.name().as_str().len()
            });
            if longer {
                best = Some(logger);
            }
        }

        best.map_or(self.default_severity, LoggerDescription::severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spec::parse;

    fn description(input: &str) -> ConfigurationDescription {
        crate::build(&parse(input).expect("valid spec"))
    }

    #[test]
    fn effective_severity_prefers_the_most_specific_entry() {
        let description = description("warn,myapp=info,myapp.db=debug");

        assert_eq!(description.effective_severity("myapp"), Severity::Info);
        assert_eq!(description.effective_severity("myapp.db"), Severity::Debug);
        assert_eq!(
            description.effective_severity("myapp.db.pool"),
            Severity::Debug
        );
        assert_eq!(description.effective_severity("myapp.api"), Severity::Info);
    }

    #[test]
    fn effective_severity_falls_back_to_the_default() {
        let description = description("warn,myapp=debug");

        assert_eq!(description.effective_severity("other"), Severity::Warning);
        assert_eq!(description.effective_severity("myapp2"), Severity::Warning);
    }

    #[test]
    fn effective_severity_normalizes_module_path_targets() {
        let description = description("warn,myapp.db=debug");

        assert_eq!(
            description.effective_severity("myapp::db::pool"),
            Severity::Debug
        );
    }

    #[test]
    fn handler_target_name() {
        assert_eq!(HandlerTarget::Stderr.as_str(), "stderr");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn description_round_trips_through_json() {
            let description = description("warn,myapp=info,myapp.db=debug");

            let json = serde_json::to_string(&description).unwrap();
            let decoded: ConfigurationDescription = serde_json::from_str(&json).unwrap();

            assert_eq!(decoded, description);
        }
    }
}
