#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logger` is the applicator half of the workspace: it takes the pure
//! [`config::ConfigurationDescription`] produced by the builder and binds it
//! to the process-wide [`log`] facade. It also owns the pieces the pure core
//! deliberately stays away from — environment lookup, the
//! configure-once-unless-reset state, and the record renderer that writes to
//! standard error.
//!
//! # Design
//!
//! The [`Applicator`] holds an explicit [`InitState`] instead of a hidden
//! module-level flag; top-level wiring constructs one applicator and passes
//! descriptions into it. The first successful [`Applicator::apply`] installs
//! a logger on the facade; after an explicit [`Applicator::reset`] a later
//! apply swaps the configuration of the installed logger in place, since the
//! facade itself accepts only one logger per process.
//!
//! # Invariants
//!
//! - The configured-flag check-and-set is an atomic compare-exchange: two
//!   racing initializations cannot both apply.
//! - Records are written to standard error only, one line per record.
//! - A record is emitted at most once: the effective severity of its target
//!   is resolved against the most specific configured component, never
//!   against several.
//!
//! # Errors
//!
//! [`Applicator::apply`] fails with [`ApplyError::AlreadyInitialized`] when
//! the state says the process is already configured, and with
//! [`ApplyError::Facade`] when the `log` facade refuses the logger because
//! some other library installed one first.

mod apply;
mod env;
mod logger;
mod render;
mod state;

pub use crate::apply::{Applicator, ApplyError};
pub use crate::env::{DEFAULT_ENV_VAR, FALLBACK_SPEC, resolve_spec};
pub use crate::state::InitState;
