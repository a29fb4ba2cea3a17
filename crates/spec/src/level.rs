//! crates/spec/src/level.rs
//! Input level spellings and the fixed severity table they map to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Level name accepted in a verbosity specification.
///
/// Spellings are matched case-insensitively on input. Each spelling maps to
/// exactly one [`Severity`] through [`Level::severity`]; `warn` and `warning`
/// are distinct spellings of the same severity, and `off` maps to
/// [`Severity::Critical`] so that everything below critical is suppressed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Finest-grained diagnostics (`trace`).
    Trace,
    /// Debugging diagnostics (`debug`).
    Debug,
    /// Informational messages (`info`).
    Info,
    /// Warnings (`warn`).
    Warn,
    /// Warnings, long spelling (`warning`).
    Warning,
    /// Errors (`error`).
    Error,
    /// Critical failures (`critical`).
    Critical,
    /// Suppress everything below critical (`off`).
    Off,
}

impl Level {
    /// All recognized level spellings in specification order.
    ///
    /// The level set is closed: callers that need to enumerate every
    /// spelling (help output, completion, exhaustive tests) can rely on this
    /// constant rather than re-specifying the sequence.
    pub const ALL: [Self; 8] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Off,
    ];

    /// Returns the canonical lowercase spelling of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Off => "off",
        }
    }

    /// Maps the spelling to its output severity.
    ///
    /// The mapping is total: every [`Level`] has a severity, so downstream
    /// configuration can never encounter an unmapped level.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Trace | Self::Debug => Severity::Debug,
            Self::Info => Severity::Info,
            Self::Warn | Self::Warning => Severity::Warning,
            Self::Error => Severity::Error,
            Self::Critical | Self::Off => Severity::Critical,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized level name")]
pub struct ParseLevelError {
    _private: (),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "off" => Ok(Self::Off),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}

/// Output severity understood by the logging facility.
///
/// Severities are ordered by their numeric rank; a logger configured at a
/// given severity emits records whose rank is greater than or equal to its
/// own. The variant order matches the rank order, so the derived `Ord`
/// agrees with [`Severity::rank`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Debugging output (rank 10).
    Debug,
    /// Informational output (rank 20).
    Info,
    /// Warnings (rank 30).
    Warning,
    /// Errors (rank 40).
    Error,
    /// Critical failures (rank 50).
    Critical,
}

impl Severity {
    /// All severities in ascending rank order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the numeric rank of the severity.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
            Self::Critical => 50,
        }
    }

    /// Returns the upper-case severity name used in rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
