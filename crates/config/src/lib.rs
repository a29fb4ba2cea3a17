#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `config` turns a parsed [`spec::Specification`] into a declarative
//! [`ConfigurationDescription`]: the logger entries, severities, handler
//! wiring, and format templates an applicator needs to materialize the
//! configuration against a live logging facility. Building a description is
//! pure — nothing here talks to the facility itself.
//!
//! # Design
//!
//! The description is a strongly typed record, not a string-keyed dictionary:
//! an applicator pattern-matches over [`HandlerTarget`] and walks
//! [`LoggerDescription`] entries instead of interpreting a reflective
//! configuration blob. [`build`] is infallible for any parser-produced
//! specification — all levels were validated during parsing, and the builder
//! adds nothing that can fail.
//!
//! # Invariants
//!
//! - Exactly one handler, bound to the standard error stream.
//! - Every component entry is attached to that handler and never propagates
//!   to ancestor loggers; its own severity and handler fully determine its
//!   output, so nothing is emitted twice through a parent.
//! - Pre-existing loggers outside the description are left untouched
//!   ([`ConfigurationDescription::disable_existing`] is always `false`).
//! - Building is deterministic: equal specifications yield structurally
//!   equal descriptions.
//!
//! # Examples
//!
//! ```
//! use config::{DEFAULT_MESSAGE_FORMAT, build};
//! use spec::{Severity, parse};
//!
//! let parsed = parse("warn,myapp=debug")?;
//! let description = build(&parsed);
//!
//! assert_eq!(description.default_severity(), Severity::Warning);
//! assert_eq!(description.handler().message_format(), DEFAULT_MESSAGE_FORMAT);
//! assert!(description.loggers().iter().all(|logger| !logger.propagate()));
//! # Ok::<(), spec::SpecError>(())
//! ```

mod builder;
mod description;

pub use crate::builder::{DEFAULT_DATE_FORMAT, DEFAULT_MESSAGE_FORMAT, build, build_with_formats};
pub use crate::description::{
    ConfigurationDescription, HandlerDescription, HandlerTarget, LoggerDescription,
};
