//! Builder for creating Document instances.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use super::Document;
use crate::{
    Result,
    containers::NodeContext,
    defaults::DefaultTable,
    mode::ModeRegistry,
    path::{ContainerPath, NodePath},
    tree::{TreeError, normalize_deep},
    types::{MathObjectKind, Mode, Settings},
};

/// A builder for creating `Document` instances.
///
/// Every option has a default: root index 0, fallback mode `simple`, the root
/// kind's default settings and the built-in default table. Whatever settings the
/// document starts with are normalized once by [`DocumentBuilder::build`].
///
/// # Example
///
/// ```
/// use mathforge::{Document, MathObjectKind, Mode};
///
/// let document = Document::builder(MathObjectKind::Equation)
///     .root_index(3)
///     .fallback_mode(Mode::Complex)
///     .build()
///     .unwrap();
///
/// assert_eq!(document.root_path().as_str(), "3-equation");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    kind: MathObjectKind,
    root_index: usize,
    fallback_mode: Mode,
    settings: Option<Settings>,
    defaults: Option<Arc<DefaultTable>>,
    seed_modes: bool,
}

impl DocumentBuilder {
    pub(super) fn new(kind: MathObjectKind) -> Self {
        Self {
            kind,
            root_index: 0,
            fallback_mode: Mode::Simple,
            settings: None,
            defaults: None,
            seed_modes: false,
        }
    }

    /// Position of the object in its list, the number in the root container path.
    pub fn root_index(mut self, index: usize) -> Self {
        self.root_index = index;
        self
    }

    /// Mode used for paths with no registered ancestor.
    pub fn fallback_mode(mut self, mode: Mode) -> Self {
        self.fallback_mode = mode;
        self
    }

    /// Initial settings. Must be of the document's kind.
    pub fn settings(mut self, settings: impl Into<Settings>) -> Self {
        self.settings = Some(settings.into());
        self
    }

    /// A shared default table.
    pub fn defaults(mut self, defaults: Arc<DefaultTable>) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Whether to register the initial modes for imported settings,
    /// see [`ModeRegistry::seed_for`].
    pub fn seed_modes(mut self, seed: bool) -> Self {
        self.seed_modes = seed;
        self
    }

    /// Builds the document, normalizing its initial settings.
    pub fn build(self) -> Result<Document> {
        if let Some(found) = self.settings.as_ref().map(Settings::kind)
            && found != self.kind
        {
            return Err(TreeError::KindMismatch {
                path: NodePath::new().to_string(),
                expected: self.kind,
                found,
            }
            .into());
        }

        let defaults = self
            .defaults
            .unwrap_or_else(|| Arc::new(DefaultTable::builtin()));
        let root = ContainerPath::root(self.root_index, self.kind);
        let mut modes = ModeRegistry::with_fallback(self.fallback_mode);

        let settings = match self.settings {
            Some(settings) => settings,
            None => defaults.get(self.kind, modes.get_mode(&root)),
        };
        if self.seed_modes {
            modes.seed_for(&root, &settings);
        }

        let settings = {
            let ctx = NodeContext::root(&defaults, &modes, root.clone(), self.kind);
            normalize_deep(&settings, &ctx)
        };

        let id = Uuid::new_v4();
        debug!(document = %id, root = %root, kind = %self.kind, "Created document");
        Ok(Document {
            id,
            kind: self.kind,
            root,
            settings,
            modes,
            defaults,
        })
    }
}
