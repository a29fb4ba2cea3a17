#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `envlog` configures the process-wide [`log`] facade from a single
//! environment variable, in the familiar `RUST_LOG` style: a default level
//! plus per-component overrides, controlled entirely by the operator.
//!
//! ```text
//! ENVLOG=warn,myapp=info,myapp.db=debug ./my-binary
//! ```
//!
//! The work happens in three layers, re-exported here: [`parse`] turns the
//! specification text into a validated [`Specification`], [`build`] turns
//! that into a declarative [`ConfigurationDescription`], and an
//! [`Applicator`] binds the description to the facade. The first two layers
//! are pure and freely reusable; only the applicator touches process state.
//!
//! # Quick start
//!
//! ```no_run
//! fn main() -> Result<(), envlog::EnvLogError> {
//!     envlog::try_init()?;
//!
//!     log::info!(target: "myapp", "listening on port 8080");
//!     log::debug!(target: "myapp.db", "pool sized to 8 connections");
//!     Ok(())
//! }
//! ```
//!
//! # Specification syntax
//!
//! A specification is a comma-separated token list. Each token is either a
//! bare level (`trace`, `debug`, `info`, `warn`/`warning`, `error`,
//! `critical`, `off`; case-insensitive) naming the default, or
//! `component=level` for one dotted component subtree. `::` separators are
//! accepted and normalized to dots. An empty specification means "warnings
//! and up for everything".
//!
//! ```
//! use envlog::{Severity, parse};
//!
//! let parsed = parse("warn,myapp=info,myapp.db=debug")?;
//! assert_eq!(parsed.default_severity(), Severity::Warning);
//! # Ok::<(), envlog::EnvLogError>(())
//! ```
//!
//! # Initialization semantics
//!
//! Initialization is applied once per process. Further `try_init` calls
//! return [`ApplyError::AlreadyInitialized`] until [`reset`] re-arms the
//! shared applicator, after which the next initialization replaces the
//! active configuration. A malformed specification fails initialization
//! outright — there is no silent fallback to a default.

use thiserror::Error;

pub use config::{
    ConfigurationDescription, DEFAULT_DATE_FORMAT, DEFAULT_MESSAGE_FORMAT, HandlerDescription,
    HandlerTarget, LoggerDescription, build, build_with_formats,
};
pub use logger::{Applicator, ApplyError, DEFAULT_ENV_VAR, FALLBACK_SPEC, InitState, resolve_spec};
pub use spec::{
    ComponentName, Level, ParseComponentNameError, ParseLevelError, Severity, SpecError,
    Specification, parse,
};

/// Errors surfaced by the `try_init` family.
#[derive(Debug, Error)]
pub enum EnvLogError {
    /// The specification text failed validation.
    #[error(transparent)]
    Spec(#[from] SpecError),
    /// The configuration could not be applied to the facade.
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// The process-wide applicator behind the `try_init` family.
static APPLICATOR: Applicator = Applicator::new();

/// Initializes logging from the [`DEFAULT_ENV_VAR`] environment variable.
///
/// An unset or empty variable selects the empty specification: warnings and
/// up for every component.
pub fn try_init() -> Result<(), EnvLogError> {
    try_init_from_env(DEFAULT_ENV_VAR)
}

/// Initializes logging from a caller-chosen environment variable.
pub fn try_init_from_env(var: &str) -> Result<(), EnvLogError> {
    init_from_text(&resolve_spec(None, var))
}

/// Initializes logging from an explicit specification string.
pub fn try_init_with_spec(spec_text: &str) -> Result<(), EnvLogError> {
    init_from_text(spec_text)
}

/// Re-arms the shared applicator so the next initialization succeeds.
///
/// The active configuration keeps filtering until the next `try_init`
/// replaces it.
pub fn reset() {
    APPLICATOR.reset();
}

/// Returns true when the shared applicator has applied a configuration.
#[must_use]
pub fn is_initialized() -> bool {
    APPLICATOR.is_configured()
}

fn init_from_text(text: &str) -> Result<(), EnvLogError> {
    let specification = parse(text)?;
    let description = build(&specification);
    APPLICATOR.apply(&description)?;
    Ok(())
}
