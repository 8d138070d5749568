//!
//! Mathforge: mode-aware settings trees for generated math objects.
//! This library provides the engine behind the "math object settings" editor:
//! a typed settings tree that repairs itself on every edit.
//!
//! ## Core Concepts
//!
//! * **Settings (`types::Settings`)**: A closed sum type with one settings shape per math object
//!   kind. Shapes nest: a `Term` owns a `Coefficients` collection, an `Expression` owns terms, an
//!   `Equation` owns one or two expressions, and so on.
//! * **Defaults (`defaults::DefaultTable`)**: The canonical settings for every kind and interface
//!   mode, validated once when the table is built.
//! * **Collection sync (`collection`)**: Keeps every array field the same length as its count field.
//! * **Interface modes (`mode::ModeRegistry`)**: Per-node `simple`/`complex` modes keyed by container
//!   path, with ancestor-prefix inheritance.
//! * **Containers (`containers`)**: Per-kind field setters and node-local invariants.
//! * **Documents (`document::Document`)**: One settings tree plus its mode registry. All writes go
//!   through parent-supplied update callbacks, bottom-up, until the root is replaced.
//! * **Rendering (`render`)**: A pre-order walk that hands a presentation layer one view per node.

pub mod collection;
pub mod constants;
pub mod containers;
pub mod defaults;
pub mod document;
pub mod input;
pub mod mode;
pub mod path;
pub mod render;
pub mod tree;
pub mod types;

/// Re-export the `Document` struct for easier access.
pub use document::{Document, DocumentBuilder};
pub use types::{MathObjectKind, Mode, Settings};

/// Result type used throughout the Mathforge library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Mathforge library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Unknown member of a closed option set
    #[error(transparent)]
    Option(#[from] types::UnknownOption),

    /// Structured default table errors from the defaults module
    #[error(transparent)]
    Defaults(defaults::DefaultsError),

    /// Structured tree addressing errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured import errors from the input module
    #[error(transparent)]
    Input(input::InputError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Option(_) => "types",
            Error::Defaults(_) => "defaults",
            Error::Tree(_) => "tree",
            Error::Input(_) => "input",
        }
    }

    /// Check if this error indicates an addressed node was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a configuration error in a default table.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Defaults(_))
    }

    /// Check if this error is a kind mismatch anywhere in the engine.
    pub fn is_kind_mismatch(&self) -> bool {
        match self {
            Error::Defaults(defaults_err) => defaults_err.is_kind_mismatch(),
            Error::Tree(tree_err) => tree_err.is_kind_mismatch(),
            Error::Input(input_err) => input_err.is_kind_mismatch(),
            _ => false,
        }
    }

    /// Check if this error came from rejected import data.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Input(_) | Error::Option(_))
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
