//! Error types for importing settings.

use thiserror::Error;

use crate::types::MathObjectKind;

/// Structured error types for rejected import data.
///
/// Missing fields are not errors; they are filled from defaults and reported.
/// These errors cover input that cannot be completed into valid settings.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InputError {
    /// The input is not a JSON object
    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The input has no `kind` and none was supplied
    #[error("Input has no 'kind'")]
    MissingKind,

    /// The `kind` tag is not a known kind
    #[error("Unknown kind '{kind}'")]
    UnknownKind { kind: String },

    /// The input's `kind` tag disagrees with the kind it was imported as
    #[error("Input is tagged '{found}' but was imported as '{expected}'")]
    KindMismatch {
        expected: MathObjectKind,
        found: MathObjectKind,
    },

    /// The merged input does not describe valid settings
    #[error("Invalid {kind} settings: {reason}")]
    Invalid { kind: MathObjectKind, reason: String },
}

impl InputError {
    /// Check if this error is about the `kind` tag
    pub fn is_kind_error(&self) -> bool {
        matches!(
            self,
            InputError::MissingKind | InputError::UnknownKind { .. } | InputError::KindMismatch { .. }
        )
    }

    /// Check if this error is a kind mismatch
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, InputError::KindMismatch { .. })
    }

    /// Check if this error rejects a field value
    pub fn is_invalid(&self) -> bool {
        matches!(self, InputError::Invalid { .. })
    }
}

impl From<InputError> for crate::Error {
    fn from(err: InputError) -> Self {
        crate::Error::Input(err)
    }
}
