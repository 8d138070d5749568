//! Interface mode registry.
//!
//! A document keeps one [`ModeRegistry`] mapping container paths to modes. Lookups
//! resolve in three steps:
//!
//! 1. An exact entry for the queried path.
//! 2. The longest registered path that is a string prefix of the queried path.
//! 3. The registry's fallback mode (`simple` unless configured otherwise).
//!
//! New nodes therefore inherit a sensible mode from their closest registered
//! ancestor without being registered themselves. Setting a mode never cascades;
//! descendants re-resolve on their next lookup.
//!
//! The registry is owned by its [`Document`](crate::Document) and is dropped with it.

use std::collections::BTreeMap;

use crate::{
    path::{ContainerPath, Step},
    types::{Mode, Settings},
};

/// Per-document map from container path to interface mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeRegistry {
    entries: BTreeMap<String, Mode>,
    fallback: Mode,
}

impl ModeRegistry {
    /// Creates an empty registry that falls back to `simple`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with a custom fallback mode.
    pub fn with_fallback(fallback: Mode) -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback,
        }
    }

    /// Resolves the mode of `path`.
    pub fn get_mode(&self, path: impl AsRef<str>) -> Mode {
        let path = path.as_ref();
        if let Some(mode) = self.entries.get(path) {
            return *mode;
        }
        self.entries
            .iter()
            .filter(|(registered, _)| path.starts_with(registered.as_str()))
            .max_by_key(|(registered, _)| registered.len())
            .map(|(_, mode)| *mode)
            .unwrap_or(self.fallback)
    }

    /// Registers `mode` for exactly `path`, replacing any previous entry.
    pub fn set_mode(&mut self, path: impl Into<String>, mode: Mode) {
        let path = path.into();
        tracing::debug!(path = %path, mode = %mode, "Setting interface mode");
        self.entries.insert(path, mode);
    }

    /// The explicitly registered mode of `path`, without inheritance.
    pub fn registered(&self, path: impl AsRef<str>) -> Option<Mode> {
        self.entries.get(path.as_ref()).copied()
    }

    /// The mode used when no registered path matches.
    pub fn fallback(&self) -> Mode {
        self.fallback
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no path is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over explicit entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Mode)> {
        self.entries.iter().map(|(path, mode)| (path.as_str(), *mode))
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Registers the initial modes for a freshly opened object.
    ///
    /// - The root is `simple`, except a relation that already holds two sides,
    ///   which is `complex` so its arity matches its mode.
    /// - Below an expression root, each element is `simple` while its coefficient
    ///   collection and first coefficient are `complex`.
    /// - Below a relation root, each side is treated like an element.
    pub fn seed_for(&mut self, root: &ContainerPath, settings: &Settings) {
        let root_mode = match settings {
            Settings::Equation(equation) if equation.sides.len() == 2 => Mode::Complex,
            Settings::Inequality(inequality) if inequality.sides.len() == 2 => Mode::Complex,
            _ => Mode::Simple,
        };
        self.set_mode(root.as_str(), root_mode);

        let children: Vec<Step> = match settings {
            Settings::Expression(expression) => {
                (0..expression.expressions.len()).map(Step::Element).collect()
            }
            Settings::Equation(equation) => (0..equation.sides.len()).map(Step::Side).collect(),
            Settings::Inequality(inequality) => {
                (0..inequality.sides.len()).map(Step::Side).collect()
            }
            _ => Vec::new(),
        };

        for step in children {
            let child = root.child(step);
            let coefficients = child.child(Step::Coefficients);
            let first = coefficients.child(Step::Coefficient(0));
            self.set_mode(child.as_str(), Mode::Simple);
            self.set_mode(coefficients.as_str(), Mode::Complex);
            self.set_mode(first.as_str(), Mode::Complex);
        }
    }

    /// A registry seeded for `settings` rooted at `root`.
    pub fn seeded(root: &ContainerPath, settings: &Settings) -> Self {
        let mut registry = Self::new();
        registry.seed_for(root, settings);
        registry
    }
}
