//! Pre-order traversal for presentation layers.
//!
//! The engine does not draw anything. [`walk`] visits every node of a document,
//! root first, and hands a [`Renderer`] one [`NodeView`] per node with everything a
//! form needs: where the node is, what mode it is in, whether it offers a mode
//! toggle, and the state of its controls.
//!
//! # Usage
//!
//! ```rust
//! use mathforge::render::{NodeView, Renderer, walk};
//! use mathforge::{Document, MathObjectKind};
//!
//! struct Paths(Vec<String>);
//!
//! impl Renderer for Paths {
//!     fn node(&mut self, view: &NodeView<'_>) {
//!         self.0.push(view.container.to_string());
//!     }
//! }
//!
//! let document = Document::new(MathObjectKind::Point).unwrap();
//! let mut paths = Paths(Vec::new());
//! walk(&document, &mut paths);
//!
//! assert_eq!(paths.0[0], "0-point");
//! assert_eq!(paths.0[1], "0-point-coefficients");
//! ```

use crate::{
    Document,
    containers::{Container, Controls, NodeContext},
    path::{ContainerPath, NodePath},
    types::{MathObjectKind, Mode, Settings, with_container},
};

/// Everything a presentation layer gets to know about one node.
#[derive(Debug, Clone)]
pub struct NodeView<'a> {
    /// Position from the root.
    pub path: NodePath,
    /// Mode lookup id.
    pub container: ContainerPath,
    pub kind: MathObjectKind,
    /// Effective interface mode.
    pub mode: Mode,
    pub parent: Option<MathObjectKind>,
    pub settings: &'a Settings,
    /// Whether a simple/complex toggle is offered.
    pub toggle: bool,
    pub controls: Controls,
    pub depth: usize,
}

/// Receives node views from [`walk`].
pub trait Renderer {
    /// Called for every node, before its children.
    fn node(&mut self, view: &NodeView<'_>);

    /// Called for every node, after its children.
    fn leave(&mut self, _view: &NodeView<'_>) {}
}

/// The control state of any node.
pub fn controls(settings: &Settings, ctx: &NodeContext<'_>) -> Controls {
    with_container!(settings, container => container.controls(ctx))
}

/// Visits every node of `document` in pre-order.
pub fn walk<R: Renderer + ?Sized>(document: &Document, renderer: &mut R) {
    let Ok(ctx) = document.context(&NodePath::new()) else {
        return;
    };
    visit(document.settings(), &ctx, NodePath::new(), renderer);
}

fn visit<R: Renderer + ?Sized>(
    settings: &Settings,
    ctx: &NodeContext<'_>,
    path: NodePath,
    renderer: &mut R,
) {
    let view = NodeView {
        depth: path.depth(),
        container: ctx.path.clone(),
        kind: ctx.kind,
        mode: ctx.mode,
        parent: ctx.parent_kind(),
        settings,
        toggle: ctx.kind.supports_mode_toggle(),
        controls: controls(settings, ctx),
        path,
    };
    renderer.node(&view);

    for step in settings.steps() {
        if let Some(child) = settings.child(step) {
            let child_ctx = ctx.child(step, child.kind());
            visit(&child, &child_ctx, view.path.child(step), renderer);
        }
    }

    renderer.leave(&view);
}
