use std::fmt::Display;

use thiserror::Error;

/// Errors signalled by the sequence transformations.
///
/// Both variants indicate misuse by the caller rather than a transient
/// condition, so nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("{operation} called on an empty sequence")]
    EmptyInput { operation: &'static str },

    #[error("invalid argument '{name}' = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl CollectionError {
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    pub fn invalid_argument(
        name: &'static str,
        value: impl Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
