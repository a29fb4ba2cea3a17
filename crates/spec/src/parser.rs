//! crates/spec/src/parser.rs
//! Single-pass parser from specification text to a validated [`Specification`].

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::component::ComponentName;
use crate::error::SpecError;
use crate::level::{Level, Severity};

/// Parsed, validated representation of a verbosity specification.
///
/// A specification carries a default severity applied to every component
/// without an explicit override, plus a map of per-component overrides. It is
/// constructed fresh on every [`parse`] call and never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Specification {
    default: Severity,
    components: BTreeMap<ComponentName, Severity>,
}

impl Specification {
    /// Severity applied to components without an explicit override.
    #[must_use]
    pub const fn default_severity(&self) -> Severity {
        self.default
    }

    /// Per-component severity overrides, keyed by normalized name.
    ///
    /// The map is sorted by component name; insertion order of the input
    /// tokens carries no meaning.
    #[must_use]
    pub const fn components(&self) -> &BTreeMap<ComponentName, Severity> {
        &self.components
    }

    /// Looks up the override for an exactly matching component name.
    #[must_use]
    pub fn component_severity(&self, name: &str) -> Option<Severity> {
        ComponentName::parse(name)
            .ok()
            .and_then(|name| self.components.get(&name).copied())
    }

    /// Returns true when the specification carries no component overrides.
    #[must_use]
    pub fn is_default_only(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for Specification {
    /// The specification produced by empty input: WARNING, no overrides.
    fn default() -> Self {
        Self {
            default: Severity::Warning,
            components: BTreeMap::new(),
        }
    }
}

impl FromStr for Specification {
    type Err = SpecError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse(input)
    }
}

/// Parses a verbosity specification string.
///
/// The input is a comma-separated token list. A bare level token sets the
/// default severity; a `component=level` token sets one override. Whitespace
/// around commas and `=` is ignored, empty tokens are skipped, and an empty
/// or whitespace-only input yields the default specification (WARNING, no
/// overrides) rather than an error. A later
/// duplicate of the same component overrides the earlier one; a second bare
/// level token is rejected.
///
/// The parse has no side effects: equal inputs always produce equal
/// specifications.
pub fn parse(input: &str) -> Result<Specification, SpecError> {
    let mut default = None;
    let mut components = BTreeMap::new();

    for raw_token in input.split(',') {
        let token = raw_token.trim();
        if token.is_empty() {
            continue;
        }

        if token.contains('=') {
            let halves: Vec<&str> = token.split('=').collect();
            let &[component_half, level_half] = halves.as_slice() else {
                return Err(SpecError::MalformedToken {
                    token: token.to_owned(),
                });
            };

            let component_half = component_half.trim();
            let level_half = level_half.trim();
            if component_half.is_empty() || level_half.is_empty() {
                return Err(SpecError::MalformedToken {
                    token: token.to_owned(),
                });
            }

            let name = ComponentName::parse(component_half).map_err(|_| {
                SpecError::InvalidComponentName {
                    name: component_half.to_owned(),
                }
            })?;
            let severity = parse_level(level_half)?;

            // Last write wins for duplicate component names.
            components.insert(name, severity);
        } else {
            let severity = parse_level(token)?;
            if default.replace(severity).is_some() {
                return Err(SpecError::DuplicateDefault);
            }
        }
    }

    Ok(Specification {
        default: default.unwrap_or(Severity::Warning),
        components,
    })
}

/// Validates a level name and maps it to its severity.
fn parse_level(name: &str) -> Result<Severity, SpecError> {
    name.parse::<Level>()
        .map(Level::severity)
        .map_err(|_| SpecError::InvalidLevel {
            name: name.to_owned(),
        })
}
