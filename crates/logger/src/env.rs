//! crates/logger/src/env.rs
//! Resolution of the specification string from argument or environment.

use std::env;

/// Environment variable consulted when no explicit variable name is given.
pub const DEFAULT_ENV_VAR: &str = "ENVLOG";

/// Specification used when neither an argument nor the environment supplies
/// one. The empty specification configures the WARNING default with no
/// component overrides.
pub const FALLBACK_SPEC: &str = "";

/// Resolves the specification text to parse.
///
/// Precedence: an explicit argument wins; otherwise the environment variable
/// named by `var` is consulted; otherwise [`FALLBACK_SPEC`]. An environment
/// value that is empty or not valid Unicode counts as unset.
#[must_use]
pub fn resolve_spec(explicit: Option<&str>, var: &str) -> String {
    if let Some(text) = explicit {
        return text.to_owned();
    }

    env::var_os(var)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.into_string().ok())
        .unwrap_or_else(|| FALLBACK_SPEC.to_owned())
}
