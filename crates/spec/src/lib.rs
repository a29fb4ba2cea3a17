#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `spec` parses the compact, human-written verbosity specifications used to
//! drive log configuration from a single environment variable. The syntax
//! follows the familiar `RUST_LOG` convention: a comma-separated list of
//! tokens where each token is either a bare level name (the default for every
//! component) or a `component=level` override for one dotted component
//! subtree.
//!
//! ```text
//! warn,myapp=info,myapp.db=debug
//! ```
//!
//! # Design
//!
//! Parsing is a single pass over the input with no I/O and no shared state:
//! [`parse`] always returns a freshly allocated [`Specification`], so the
//! parser can be called concurrently from any number of threads and reused by
//! validation tooling without isolating global state. The level table is a
//! fixed enum-to-enum mapping ([`Level::severity`]) rather than a runtime
//! dictionary; the level set is closed by design.
//!
//! # Invariants
//!
//! - Every recognized level name maps to exactly one [`Severity`]; an
//!   unrecognized name is a [`SpecError::InvalidLevel`], never a silent
//!   default.
//! - Stored component names are always dot-separated; the `::` spelling
//!   accepted on input never persists past parsing.
//! - At most one bare level token may appear in a specification.
//! - A single bad token invalidates the whole specification; there is no
//!   partial recovery.
//!
//! # Errors
//!
//! All validation failures surface as [`SpecError`] values from [`parse`].
//! The narrower [`ParseLevelError`] and [`ParseComponentNameError`] types are
//! returned by the `FromStr` implementations on [`Level`] and
//! [`ComponentName`] for callers that validate the pieces individually.
//!
//! # Examples
//!
//! ```
//! use spec::{Severity, parse};
//!
//! let parsed = parse("warn,myapp=debug")?;
//! assert_eq!(parsed.default_severity(), Severity::Warning);
//! assert_eq!(parsed.component_severity("myapp"), Some(Severity::Debug));
//! # Ok::<(), spec::SpecError>(())
//! ```

mod component;
mod error;
mod level;
mod parser;

pub use crate::component::{ComponentName, ParseComponentNameError};
pub use crate::error::SpecError;
pub use crate::level::{Level, ParseLevelError, Severity};
pub use crate::parser::{Specification, parse};
