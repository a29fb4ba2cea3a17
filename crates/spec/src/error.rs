//! crates/spec/src/error.rs
//! Validation errors surfaced while parsing a verbosity specification.

use thiserror::Error;

/// Errors returned when parsing a verbosity specification fails.
///
/// A specification is rejected as a whole: the first bad token aborts the
/// parse and no partial result is produced.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SpecError {
    /// A token's level half is not in the recognized level table.
    #[error("unrecognized log level `{name}`")]
    InvalidLevel {
        /// The level name as written in the specification.
        name: String,
    },
    /// A token's component half fails the name pattern after separator
    /// normalization.
    #[error("invalid component name `{name}`")]
    InvalidComponentName {
        /// The component name as written in the specification.
        name: String,
    },
    /// More than one bare level token was present.
    #[error("only one default level allowed")]
    DuplicateDefault,
    /// A token contains `=` but cannot be split into a component and a level.
    #[error("malformed token `{token}`")]
    MalformedToken {
        /// The offending token, trimmed.
        token: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SpecError::InvalidLevel {
            name: "bogus".to_owned(),
        };
        assert_eq!(err.to_string(), "unrecognized log level `bogus`");

        let err = SpecError::InvalidComponentName {
            name: "1bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid component name `1bad`");

        let err = SpecError::MalformedToken {
            token: "=debug".to_owned(),
        };
        assert_eq!(err.to_string(), "malformed token `=debug`");
    }

    #[test]
    fn duplicate_default_message_is_fixed() {
        assert_eq!(
            SpecError::DuplicateDefault.to_string(),
            "only one default level allowed"
        );
    }
}
