//! Interface mode transitions.
//!
//! Switching a node's mode registers the new mode, replaces the node with the
//! default for that mode, and copies back the fields its container preserves.
//! Leaf and collection kinds keep their key fields; composite kinds keep nothing,
//! so a round trip `simple -> complex -> simple` does not restore them.

use tracing::debug;

use super::Document;
use crate::{
    Result,
    containers::Container,
    path::{NodePath, Step},
    tree::TreeError,
    types::{Mode, Settings},
};

/// Copies the fields `current` keeps across a mode switch onto `base`.
fn preserve(current: &Settings, base: Settings) -> Settings {
    macro_rules! preserve_by_kind {
        ($($variant:ident),+) => {
            match (current, base) {
                $((Settings::$variant(old), Settings::$variant(new)) => old.preserve(new).into(),)+
                (_, base) => base,
            }
        };
    }
    preserve_by_kind!(
        Coefficient,
        Coefficients,
        Term,
        Terms,
        Expression,
        Function,
        Equation,
        Inequality,
        Point,
        Set,
        Interval
    )
}

impl Document {
    /// Switches the node at `path` to `mode`.
    ///
    /// Does nothing if the node is already in `mode`. Fails for kinds without a
    /// mode toggle.
    pub fn switch_mode(&mut self, path: &NodePath, mode: Mode) -> Result<()> {
        let ctx = self.context(path)?;
        let kind = ctx.kind;
        if !kind.supports_mode_toggle() {
            return Err(TreeError::ModeToggleUnsupported { kind }.into());
        }
        let previous = ctx.mode;
        if previous == mode {
            return Ok(());
        }
        let container = ctx.path.clone();

        let current = self.read(path)?;
        let base = self.defaults.get(kind, mode);
        let next = preserve(&current, base);

        self.modes.set_mode(container.as_str(), mode);
        if let Settings::Coefficients(coefficients) = &next {
            for index in 0..coefficients.coefficients.len() {
                self.modes
                    .set_mode(container.child(Step::Coefficient(index)).as_str(), mode);
            }
        }

        debug!(
            path = %container,
            kind = %kind,
            from = %previous,
            to = %mode,
            lossy = kind.is_lossy_on_mode_switch(),
            "Switching interface mode"
        );
        self.update(path, next)
    }

    /// Switches the node at `path` to the other mode and returns the new mode.
    pub fn toggle_mode(&mut self, path: &NodePath) -> Result<Mode> {
        let mode = self.get_mode(path).toggled();
        self.switch_mode(path, mode)?;
        Ok(mode)
    }
}
