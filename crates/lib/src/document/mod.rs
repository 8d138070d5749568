//! Documents: one settings tree and its interface mode registry.
//!
//! A [`Document`] is the unit of ownership for the engine. It holds:
//!
//! - the settings tree of one math object (the root node and everything below it),
//! - the [`ModeRegistry`] for that tree, created and dropped with the document,
//! - a shared [`DefaultTable`].
//!
//! # Reads and writes
//!
//! Reads descend from the root by [`NodePath`]. Writes go the other way: the new
//! slice for a node is normalized, then handed to an update callback supplied by its
//! parent. The parent merges it into its own settings, normalizes itself, and calls
//! the callback its own parent supplied, until the root callback replaces the tree.
//! The root replacement is the only mutation of the document's settings.
//!
//! Edits never fail because of bad values; those are repaired. Errors are returned
//! only for paths that do not exist and for slices of the wrong kind.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::{
    Result,
    containers::{Container, NodeContext},
    defaults::DefaultTable,
    mode::ModeRegistry,
    path::{ContainerPath, NodePath, Step},
    tree::{TreeError, normalize_deep, normalize_local},
    types::{MathInput, MathObjectKind, Mode, Settings},
};

mod builder;
mod transition;

pub use builder::DocumentBuilder;


/// Receives the repaired settings of a node and writes them into its parent.
type Update<'u> = &'u mut dyn FnMut(Settings) -> Result<()>;

/// One math object's settings tree plus its interface modes.
#[derive(Debug, Clone)]
pub struct Document {
    id: Uuid,
    kind: MathObjectKind,
    root: ContainerPath,
    settings: Settings,
    modes: ModeRegistry,
    defaults: Arc<DefaultTable>,
}

impl Document {
    /// Starts configuring a document whose root is of `kind`.
    pub fn builder(kind: MathObjectKind) -> DocumentBuilder {
        DocumentBuilder::new(kind)
    }

    /// A document holding the default settings for `kind`.
    pub fn new(kind: MathObjectKind) -> Result<Self> {
        Self::builder(kind).build()
    }

    /// Opens an imported object, seeding the interface modes from its settings.
    pub fn from_input(input: MathInput) -> Result<Self> {
        Self::builder(input.kind())
            .settings(input.settings)
            .seed_modes(true)
            .build()
    }

    /// Restores a document from a settings snapshot.
    ///
    /// Snapshots carry no modes, so they are seeded from the settings as on import.
    /// A two-sided relation reopens in complex mode.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Self::builder(settings.kind())
            .settings(settings)
            .seed_modes(true)
            .build()
    }

    /// Serializes the settings tree. Interface modes are not included.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.settings)?)
    }

    /// Unique id of this open document.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Kind of the root node.
    pub fn kind(&self) -> MathObjectKind {
        self.kind
    }

    /// Container path of the root node.
    pub fn root_path(&self) -> &ContainerPath {
        &self.root
    }

    /// The whole settings tree.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The interface mode registry.
    pub fn modes(&self) -> &ModeRegistry {
        &self.modes
    }

    /// The default table.
    pub fn defaults(&self) -> &Arc<DefaultTable> {
        &self.defaults
    }

    /// The container path of the node at `path`.
    pub fn container_path(&self, path: &NodePath) -> ContainerPath {
        self.root.join(path)
    }

    /// The settings of the node at `path`.
    pub fn read(&self, path: &NodePath) -> Result<Settings> {
        Ok(self.settings.descend(path)?)
    }

    /// The interface mode of the node at `path`.
    pub fn get_mode(&self, path: &NodePath) -> Mode {
        self.modes.get_mode(self.container_path(path))
    }

    /// Registers a mode for the node at `path` without resetting its settings.
    ///
    /// The arity of an equation or inequality is not touched, so registering a mode
    /// on a relation can leave it with the other mode's number of sides. Use
    /// [`Document::switch_mode`] for relations and for the full transition.
    pub fn set_mode(&mut self, path: &NodePath, mode: Mode) {
        let container = self.container_path(path);
        self.modes.set_mode(container.as_str(), mode);
    }

    /// The canonical default for `kind` in `mode`.
    pub fn get_default(&self, kind: MathObjectKind, mode: Mode) -> Settings {
        self.defaults.get(kind, mode)
    }

    /// The context of the root node.
    fn root_context(&self) -> NodeContext<'_> {
        NodeContext::root(&self.defaults, &self.modes, self.root.clone(), self.kind)
    }

    /// The context of the node at `path`.
    pub fn context(&self, path: &NodePath) -> Result<NodeContext<'_>> {
        let mut ctx = self.root_context();
        let mut node = self.settings.clone();
        for step in path.steps() {
            let child = node.child(*step).ok_or_else(|| missing(path, *step, &node))?;
            ctx = ctx.child(*step, child.kind());
            node = child;
        }
        Ok(ctx)
    }

    /// Replaces the node at `path` with `slice`.
    ///
    /// The slice is fully normalized, then merged into each ancestor in turn; each
    /// ancestor re-normalizes its own fields before passing itself up.
    pub fn update(&mut self, path: &NodePath, slice: Settings) -> Result<()> {
        let kind = self.kind;
        let mut replaced = None;
        {
            let ctx = self.root_context();
            let mut commit = |root: Settings| -> Result<()> {
                if root.kind() != kind {
                    return Err(TreeError::KindMismatch {
                        path: NodePath::new().to_string(),
                        expected: kind,
                        found: root.kind(),
                    }
                    .into());
                }
                replaced = Some(root);
                Ok(())
            };
            propagate(
                &self.settings,
                &ctx,
                &NodePath::new(),
                path.steps(),
                slice,
                &mut commit,
            )?;
        }
        if let Some(root) = replaced {
            debug!(
                document = %self.id,
                path = %self.container_path(path),
                "Updated settings"
            );
            self.settings = root;
        }
        Ok(())
    }

    /// Applies a container edit to the node at `path`.
    ///
    /// `edit` receives the node's current settings and context and returns the new
    /// settings, which are then written with [`Document::update`].
    pub fn edit<C, F>(&mut self, path: &NodePath, edit: F) -> Result<()>
    where
        C: Container,
        F: FnOnce(&C, &NodeContext<'_>) -> C,
    {
        let next = {
            let ctx = self.context(path)?;
            let current = self.read(path)?;
            let shape = C::try_from(current).map_err(|found| TreeError::KindMismatch {
                path: path.to_string(),
                expected: C::KIND,
                found: found.kind(),
            })?;
            edit(&shape, &ctx)
        };
        self.update(path, next.into())
    }

    /// Sets the count of the collection at `path`.
    ///
    /// Coefficient collections, term combinations and expressions have a count.
    /// Locked counts ignore the edit.
    pub fn set_count(&mut self, path: &NodePath, count: usize) -> Result<()> {
        let next = {
            let ctx = self.context(path)?;
            match self.read(path)? {
                Settings::Coefficients(c) => Settings::from(c.with_count(&ctx, count)),
                Settings::Terms(t) => t.with_count(&ctx, count).into(),
                Settings::Expression(e) => e.with_count(&ctx, count).into(),
                other => {
                    return Err(TreeError::NotCountable {
                        path: path.to_string(),
                        kind: other.kind(),
                    }
                    .into());
                }
            }
        };
        self.update(path, next)
    }

    /// Re-normalizes the whole tree, e.g. after modes were registered directly.
    pub fn repair(&mut self) {
        let repaired = normalize_deep(&self.settings, &self.root_context());
        self.settings = repaired;
    }
}

fn missing(path: &NodePath, step: Step, node: &Settings) -> crate::Error {
    TreeError::InvalidPath {
        path: path.to_string(),
        reason: format!("a {} node has no child {step}", node.kind()),
    }
    .into()
}

/// Descends along `steps`, replaces the node at the end with `slice`, and passes the
/// repaired node to `update`. Every level supplies the update callback of the level
/// below it.
fn propagate(
    node: &Settings,
    ctx: &NodeContext<'_>,
    at: &NodePath,
    steps: &[Step],
    slice: Settings,
    update: Update<'_>,
) -> Result<()> {
    let Some((step, rest)) = steps.split_first() else {
        let leaf = NodeContext {
            kind: slice.kind(),
            ..ctx.clone()
        };
        return update(normalize_deep(&slice, &leaf));
    };

    let child = node
        .child(*step)
        .ok_or_else(|| missing(&at.child(*step), *step, node))?;
    let child_ctx = ctx.child(*step, child.kind());
    let mut merge = |repaired: Settings| -> Result<()> {
        let merged = node
            .with_child(*step, repaired)
            .map_err(|err| err.under(at))?;
        update(normalize_local(&merged, ctx))
    };
    propagate(&child, &child_ctx, &at.child(*step), rest, slice, &mut merge)
}
