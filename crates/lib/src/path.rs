//! Path types for addressing nodes in a settings tree.
//!
//! Two kinds of path exist and they are never mixed:
//!
//! - [`NodePath`] - A typed sequence of [`Step`]s from the root to a node. Used to
//!   read and update settings.
//! - [`ContainerPath`] - The hierarchical string id of a node, built by appending one
//!   suffix per step to the root id. Used only to look up interface modes; it is never
//!   stored in the settings themselves.
//!
//! # Usage
//!
//! ```rust
//! use mathforge::path::{ContainerPath, NodePath, Step};
//! use mathforge::MathObjectKind;
//!
//! let path = NodePath::new().push(Step::Coefficients).push(Step::Coefficient(2));
//! let root = ContainerPath::root(0, MathObjectKind::Point);
//!
//! assert_eq!(root.join(&path).as_str(), "0-point-coefficients-coefficient-2");
//! assert_eq!(path.to_string(), "coefficients/coefficient[2]");
//! ```

use std::fmt;

use crate::{
    constants::{
        COEFFICIENT_SUFFIX, COEFFICIENTS_SUFFIX, ELEMENT_SUFFIX, EXPRESSION_SUFFIX, SIDE_SUFFIX,
        TERM_SUFFIX,
    },
    types::MathObjectKind,
};

/// One descent from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The `Coefficients` collection of a term, point, set or interval.
    Coefficients,
    /// One coefficient of a `Coefficients` collection.
    Coefficient(usize),
    /// One term of a `Terms` combination.
    Term(usize),
    /// One element of an `Expression`.
    Element(usize),
    /// One side of an equation or inequality.
    Side(usize),
    /// The body of a function.
    Expression,
}

impl Step {
    /// The container path suffix for this step.
    pub fn suffix(&self) -> String {
        match self {
            Step::Coefficients => COEFFICIENTS_SUFFIX.to_string(),
            Step::Coefficient(index) => format!("{COEFFICIENT_SUFFIX}{index}"),
            Step::Term(index) => format!("{TERM_SUFFIX}{index}"),
            Step::Element(index) => format!("{ELEMENT_SUFFIX}{index}"),
            Step::Side(index) => format!("{SIDE_SUFFIX}{index}"),
            Step::Expression => EXPRESSION_SUFFIX.to_string(),
        }
    }

    /// The element index, for indexed steps.
    pub fn index(&self) -> Option<usize> {
        match self {
            Step::Coefficient(index)
            | Step::Term(index)
            | Step::Element(index)
            | Step::Side(index) => Some(*index),
            Step::Coefficients | Step::Expression => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Coefficients => write!(f, "coefficients"),
            Step::Coefficient(index) => write!(f, "coefficient[{index}]"),
            Step::Term(index) => write!(f, "term[{index}]"),
            Step::Element(index) => write!(f, "element[{index}]"),
            Step::Side(index) => write!(f, "side[{index}]"),
            Step::Expression => write!(f, "expression"),
        }
    }
}

/// An owned path from the root of a settings tree to one node.
///
/// The empty path addresses the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    steps: Vec<Step>,
}

impl NodePath {
    /// The path of the root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step, returning the extended path.
    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends a step in place.
    pub fn push_mut(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// A new path one step below this one.
    pub fn child(&self, step: Step) -> Self {
        self.clone().push(step)
    }

    /// The path one step up, or `None` at the root.
    pub fn parent(&self) -> Option<NodePath> {
        let (_, init) = self.steps.split_last()?;
        Some(NodePath {
            steps: init.to_vec(),
        })
    }

    /// The steps from the root.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The final step, or `None` at the root.
    pub fn last(&self) -> Option<Step> {
        self.steps.last().copied()
    }

    /// Whether this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "/");
        }
        let rendered: Vec<String> = self.steps.iter().map(Step::to_string).collect();
        write!(f, "{}", rendered.join("/"))
    }
}

impl From<Vec<Step>> for NodePath {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl<const N: usize> From<[Step; N]> for NodePath {
    fn from(steps: [Step; N]) -> Self {
        Self {
            steps: steps.to_vec(),
        }
    }
}

/// The string id of a node, used as the interface mode lookup key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerPath {
    inner: String,
}

impl ContainerPath {
    /// The root id of the `index`-th object of a given kind, e.g. `"0-equation"`.
    pub fn root(index: usize, kind: MathObjectKind) -> Self {
        Self {
            inner: format!("{index}-{kind}"),
        }
    }

    /// Wraps an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { inner: id.into() }
    }

    /// The id one step below this one.
    pub fn child(&self, step: Step) -> Self {
        Self {
            inner: format!("{}{}", self.inner, step.suffix()),
        }
    }

    /// The id of the node at `path` below this one.
    pub fn join(&self, path: &NodePath) -> Self {
        path.steps()
            .iter()
            .fold(self.clone(), |current, step| current.child(*step))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether `self` is a string prefix of `other` (an ancestor or the node itself).
    pub fn is_prefix_of(&self, other: &str) -> bool {
        other.starts_with(&self.inner)
    }
}

impl AsRef<str> for ContainerPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for ContainerPath {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContainerPath {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
