//! crates/spec/src/component.rs
//! Validated, dot-separated hierarchical component names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Dotted hierarchical component identifier, e.g. `myapp.db`.
///
/// Each dot-separated segment starts with an ASCII letter or underscore and
/// continues with letters, digits, or underscores. The alternative `::`
/// separator is accepted on input and normalized to dots before validation,
/// so a stored name is always in the dotted form regardless of how it was
/// written.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ComponentName(String);

impl ComponentName {
    /// Parses and normalizes a component name.
    ///
    /// Every `::` in the input is replaced with a single dot before the
    /// segment pattern is checked, so `myapp::core` and `myapp.core` produce
    /// equal names.
    pub fn parse(input: &str) -> Result<Self, ParseComponentNameError> {
        let normalized = input.replace("::", ".");

        if normalized.is_empty() {
            return Err(ParseComponentNameError { _private: () });
        }

        for segment in normalized.split('.') {
            if !is_valid_segment(segment) {
                return Err(ParseComponentNameError { _private: () });
            }
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized, dot-separated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when `target` names this component or one of its
    /// descendants.
    ///
    /// `target` must already be in the dotted form; matching happens on dot
    /// boundaries only, so `myapp` covers `myapp.db` but not `myapp2`.
    #[must_use]
    pub fn matches(&self, target: &str) -> bool {
        match target.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

/// Returns true when `segment` matches `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a component name fails validation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid component name")]
pub struct ParseComponentNameError {
    _private: (),
}

impl FromStr for ComponentName {
    type Err = ParseComponentNameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}
