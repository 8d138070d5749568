//! Error types for default table construction.

use thiserror::Error;

use crate::types::MathObjectKind;

/// Structured error types for default table validation.
///
/// A default table is validated once when it is built. Any of these errors means
/// the engine's own configuration is broken, never that user input was bad.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DefaultsError {
    /// No simple default was supplied for a kind in the closed set
    #[error("No default settings registered for kind '{kind}'")]
    MissingDefault { kind: MathObjectKind },

    /// A table entry holds settings of a different kind than its key
    #[error("Default settings for '{expected}' have kind '{found}'")]
    KindMismatch {
        expected: MathObjectKind,
        found: MathObjectKind,
    },
}

impl DefaultsError {
    /// Check if this error is a missing table entry
    pub fn is_missing_default(&self) -> bool {
        matches!(self, DefaultsError::MissingDefault { .. })
    }

    /// Check if this error is a mis-keyed table entry
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, DefaultsError::KindMismatch { .. })
    }

    /// Get the kind whose entry is broken
    pub fn kind(&self) -> MathObjectKind {
        match self {
            DefaultsError::MissingDefault { kind } => *kind,
            DefaultsError::KindMismatch { expected, .. } => *expected,
        }
    }
}

impl From<DefaultsError> for crate::Error {
    fn from(err: DefaultsError) -> Self {
        crate::Error::Defaults(err)
    }
}
