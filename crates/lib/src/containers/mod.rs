//! Per-kind settings containers.
//!
//! A container is the settings shape of one kind plus the operations a presentation
//! layer may invoke on it: field setters returning a new value, node-local
//! normalization, the state of its controls and the fields it keeps across a mode
//! switch. Containers never reach up or down the tree themselves; everything they
//! need to know about their position arrives in a [`NodeContext`].
//!
//! # Core Types
//!
//! - [`Container`] - Node-local behavior of one settings shape
//! - [`NodeContext`] - Where a node sits: its container path, mode and parent
//! - [`Controls`] - What a presentation layer should offer for a node

use crate::{
    defaults::{DefaultTable, ModeDefaults},
    mode::ModeRegistry,
    path::{ContainerPath, Step},
    types::{
        CoefficientRule, CoefficientSettings, CoefficientsSettings, CombinationType,
        EquationSettings, ExpressionSettings, FunctionSettings, InequalitySettings,
        IntervalSettings, MathObjectKind, Mode, PointSettings, RepresentationType, SetSettings,
        Settings, TermSettings, TermsSettings,
    },
};

mod coefficient;
mod coefficients;
mod expression;
mod function;
mod named;
mod relation;
pub mod rules;
mod term;
mod terms;

/// The parent of a node, as seen from the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentContext {
    pub kind: MathObjectKind,
    pub mode: Mode,
    pub path: ContainerPath,
}

/// The position of one node in a document.
#[derive(Debug, Clone)]
pub struct NodeContext<'a> {
    pub defaults: &'a DefaultTable,
    pub modes: &'a ModeRegistry,
    pub path: ContainerPath,
    pub kind: MathObjectKind,
    /// The node's resolved interface mode.
    pub mode: Mode,
    pub parent: Option<ParentContext>,
}

impl<'a> NodeContext<'a> {
    /// The context of a document root.
    pub fn root(
        defaults: &'a DefaultTable,
        modes: &'a ModeRegistry,
        path: ContainerPath,
        kind: MathObjectKind,
    ) -> Self {
        let mode = modes.get_mode(&path);
        Self {
            defaults,
            modes,
            path,
            kind,
            mode,
            parent: None,
        }
    }

    /// The context of the child reached by `step`.
    pub fn child(&self, step: Step, kind: MathObjectKind) -> NodeContext<'a> {
        let path = self.path.child(step);
        let mode = self.modes.get_mode(&path);
        NodeContext {
            defaults: self.defaults,
            modes: self.modes,
            path,
            kind,
            mode,
            parent: Some(ParentContext {
                kind: self.kind,
                mode: self.mode,
                path: self.path.clone(),
            }),
        }
    }

    /// The parent's kind, if any.
    pub fn parent_kind(&self) -> Option<MathObjectKind> {
        self.parent.as_ref().map(|parent| parent.kind)
    }

    /// The parent's mode, or this node's own mode at the root.
    pub fn parent_mode(&self) -> Mode {
        self.parent
            .as_ref()
            .map(|parent| parent.mode)
            .unwrap_or(self.mode)
    }

    /// The default of `C` for this node's mode.
    pub fn default_of<C: Shape>(&self) -> C {
        C::defaults(self.defaults).get(self.mode).clone()
    }
}

/// State of a count input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountControl {
    pub value: usize,
    pub min: usize,
    /// The input is shown but refuses edits.
    pub locked: bool,
}

/// What a presentation layer should offer for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub count: Option<CountControl>,
    pub rules_locked: bool,
    pub combination_options: Vec<CombinationType>,
    pub representation_options: Vec<RepresentationType>,
    pub disabled_rules: Vec<CoefficientRule>,
}

/// A settings shape tied to one [`MathObjectKind`].
pub trait Shape: Clone + Into<Settings> + TryFrom<Settings, Error = Settings> {
    /// The kind of node this shape belongs to.
    const KIND: MathObjectKind;

    /// The typed entry for this kind in a default table.
    fn defaults(table: &DefaultTable) -> &ModeDefaults<Self>;
}

macro_rules! shapes {
    ($($variant:ident($shape:ty) => $field:ident),+ $(,)?) => {
        $(
            impl Shape for $shape {
                const KIND: MathObjectKind = MathObjectKind::$variant;

                fn defaults(table: &DefaultTable) -> &ModeDefaults<Self> {
                    table.$field()
                }
            }
        )+
    };
}

shapes! {
    Coefficient(CoefficientSettings) => coefficient,
    Coefficients(CoefficientsSettings) => coefficients,
    Term(TermSettings) => term,
    Terms(TermsSettings) => terms,
    Expression(ExpressionSettings) => expression,
    Function(FunctionSettings) => function,
    Equation(EquationSettings) => equation,
    Inequality(InequalitySettings) => inequality,
    Point(PointSettings) => point,
    Set(SetSettings) => set,
    Interval(IntervalSettings) => interval,
}

/// Node-local behavior of a settings shape.
pub trait Container: Shape {
    /// Restores every node-local invariant. Children are not visited.
    fn normalize(&self, ctx: &NodeContext<'_>) -> Self;

    /// The control state a presentation layer should show.
    fn controls(&self, _ctx: &NodeContext<'_>) -> Controls {
        Controls::default()
    }

    /// Copies the fields that survive a mode switch onto `base`.
    ///
    /// `base` is the default for the new mode. The default keeps nothing.
    fn preserve(&self, base: Self) -> Self {
        base
    }
}
