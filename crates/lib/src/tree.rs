//! Structural navigation of a settings tree.
//!
//! A [`Settings`] value is a plain tree. This module knows which children each kind
//! has, how to read one out and how to write one back, and how to run every
//! container's normalization over a whole subtree.

use thiserror::Error;
use tracing::trace;

use crate::{
    containers::{Container, NodeContext, Shape},
    path::{NodePath, Step},
    types::{ExpressionElement, MathObjectKind, Settings, with_container},
};

/// Structured error types for tree addressing.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// The path does not lead to a node
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A node of the wrong kind was supplied for a position
    #[error("Kind mismatch at '{path}': expected {expected}, found {found}")]
    KindMismatch {
        path: String,
        expected: MathObjectKind,
        found: MathObjectKind,
    },

    /// A count edit was addressed to a node without a count
    #[error("Node at '{path}' of kind {kind} has no count")]
    NotCountable { path: String, kind: MathObjectKind },

    /// A mode switch was addressed to a kind without a mode toggle
    #[error("Kind {kind} does not support switching modes")]
    ModeToggleUnsupported { kind: MathObjectKind },
}

impl TreeError {
    /// Check if this error means the addressed node does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::InvalidPath { .. })
    }

    /// Check if this error is a kind mismatch
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, TreeError::KindMismatch { .. })
    }

    /// Check if this error rejects an operation for the node's kind
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            TreeError::NotCountable { .. } | TreeError::ModeToggleUnsupported { .. }
        )
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::InvalidPath { path, .. }
            | TreeError::KindMismatch { path, .. }
            | TreeError::NotCountable { path, .. } => Some(path),
            TreeError::ModeToggleUnsupported { .. } => None,
        }
    }

    /// Prefixes the error's path with the path of the node it was raised under.
    pub(crate) fn under(self, parent: &NodePath) -> Self {
        let join = |path: String| {
            if parent.is_root() {
                path
            } else {
                format!("{parent}/{path}")
            }
        };
        match self {
            TreeError::InvalidPath { path, reason } => TreeError::InvalidPath {
                path: join(path),
                reason,
            },
            TreeError::KindMismatch {
                path,
                expected,
                found,
            } => TreeError::KindMismatch {
                path: join(path),
                expected,
                found,
            },
            other => other,
        }
    }
}

impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}

fn out_of_range(step: Step) -> TreeError {
    TreeError::InvalidPath {
        path: step.to_string(),
        reason: "index out of range".to_string(),
    }
}

fn expect<S: Shape>(step: Step, child: Settings) -> Result<S, TreeError> {
    S::try_from(child).map_err(|found| TreeError::KindMismatch {
        path: step.to_string(),
        expected: S::KIND,
        found: found.kind(),
    })
}

impl Settings {
    /// The steps to every child of this node, in order.
    pub fn steps(&self) -> Vec<Step> {
        match self {
            Settings::Coefficient(_) => Vec::new(),
            Settings::Coefficients(c) => (0..c.coefficients.len()).map(Step::Coefficient).collect(),
            Settings::Term(_) | Settings::Point(_) | Settings::Set(_) | Settings::Interval(_) => {
                vec![Step::Coefficients]
            }
            Settings::Terms(t) => (0..t.terms.len()).map(Step::Term).collect(),
            Settings::Expression(e) => (0..e.expressions.len()).map(Step::Element).collect(),
            Settings::Function(_) => vec![Step::Expression],
            Settings::Equation(e) => (0..e.sides.len()).map(Step::Side).collect(),
            Settings::Inequality(i) => (0..i.sides.len()).map(Step::Side).collect(),
        }
    }

    /// A copy of the child reached by `step`, if there is one.
    pub fn child(&self, step: Step) -> Option<Settings> {
        match (self, step) {
            (Settings::Coefficients(c), Step::Coefficient(i)) => {
                c.coefficients.get(i).cloned().map(Settings::from)
            }
            (Settings::Term(t), Step::Coefficients) => Some(t.coefficients.clone().into()),
            (Settings::Point(p), Step::Coefficients) => Some(p.coefficients.clone().into()),
            (Settings::Set(s), Step::Coefficients) => Some(s.coefficients.clone().into()),
            (Settings::Interval(i), Step::Coefficients) => Some(i.coefficients.clone().into()),
            (Settings::Terms(t), Step::Term(i)) => t.terms.get(i).cloned().map(Settings::from),
            (Settings::Expression(e), Step::Element(i)) => {
                e.expressions.get(i).cloned().map(Settings::from)
            }
            (Settings::Function(f), Step::Expression) => Some(f.expression.clone().into()),
            (Settings::Equation(e), Step::Side(i)) => e.sides.get(i).cloned().map(Settings::from),
            (Settings::Inequality(q), Step::Side(i)) => {
                q.sides.get(i).cloned().map(Settings::from)
            }
            _ => None,
        }
    }

    /// A copy of this node with the child at `step` replaced.
    ///
    /// The child must have the kind of the position it is written to; an expression
    /// element accepts either a term or a combination of terms.
    pub fn with_child(&self, step: Step, child: Settings) -> Result<Settings, TreeError> {
        let mut next = self.clone();
        match (&mut next, step) {
            (Settings::Coefficients(c), Step::Coefficient(i)) => {
                let slot = c.coefficients.get_mut(i).ok_or_else(|| out_of_range(step))?;
                *slot = expect(step, child)?;
            }
            (Settings::Term(t), Step::Coefficients) => t.coefficients = expect(step, child)?,
            (Settings::Point(p), Step::Coefficients) => p.coefficients = expect(step, child)?,
            (Settings::Set(s), Step::Coefficients) => s.coefficients = expect(step, child)?,
            (Settings::Interval(i), Step::Coefficients) => i.coefficients = expect(step, child)?,
            (Settings::Terms(t), Step::Term(i)) => {
                let slot = t.terms.get_mut(i).ok_or_else(|| out_of_range(step))?;
                *slot = expect(step, child)?;
            }
            (Settings::Expression(e), Step::Element(i)) => {
                let slot = e.expressions.get_mut(i).ok_or_else(|| out_of_range(step))?;
                let expected = slot.kind();
                *slot = ExpressionElement::try_from(child).map_err(|found| {
                    TreeError::KindMismatch {
                        path: step.to_string(),
                        expected,
                        found: found.kind(),
                    }
                })?;
            }
            (Settings::Function(f), Step::Expression) => f.expression = expect(step, child)?,
            (Settings::Equation(e), Step::Side(i)) => {
                e.sides = e
                    .sides
                    .with_side(i, expect(step, child)?)
                    .ok_or_else(|| out_of_range(step))?;
            }
            (Settings::Inequality(q), Step::Side(i)) => {
                q.sides = q
                    .sides
                    .with_side(i, expect(step, child)?)
                    .ok_or_else(|| out_of_range(step))?;
            }
            (node, step) => {
                return Err(TreeError::InvalidPath {
                    path: step.to_string(),
                    reason: format!("a {} node has no such child", node.kind()),
                });
            }
        }
        Ok(next)
    }

    /// A copy of the node at `path` below this one.
    pub fn descend(&self, path: &NodePath) -> Result<Settings, TreeError> {
        let mut walked = NodePath::new();
        let mut node = self.clone();
        for step in path.steps() {
            let child = node.child(*step).ok_or_else(|| {
                TreeError::InvalidPath {
                    path: step.to_string(),
                    reason: format!("a {} node has no such child", node.kind()),
                }
                .under(&walked)
            })?;
            walked.push_mut(*step);
            node = child;
        }
        Ok(node)
    }
}

/// Runs the node's own container normalization. Children are left untouched.
pub fn normalize_local(settings: &Settings, ctx: &NodeContext<'_>) -> Settings {
    with_container!(settings, container => container.normalize(ctx).into())
}

/// Normalizes a whole subtree.
///
/// The node is normalized before its children, so that collections have the right
/// length when their elements are visited, and once more after, so that it sees
/// any count its children corrected.
pub fn normalize_deep(settings: &Settings, ctx: &NodeContext<'_>) -> Settings {
    let mut node = normalize_local(settings, ctx);
    for step in node.steps() {
        let Some(child) = node.child(step) else {
            continue;
        };
        let child_ctx = ctx.child(step, child.kind());
        let repaired = normalize_deep(&child, &child_ctx);
        if let Ok(next) = node.with_child(step, repaired) {
            node = next;
        }
    }
    trace!(path = %ctx.path, kind = %ctx.kind, "Normalized subtree");
    normalize_local(&node, ctx)
}
