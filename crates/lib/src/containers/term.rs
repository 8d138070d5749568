use tracing::trace;

use super::{Container, NodeContext};
use crate::{
    collection::{CountSync, blank_term_id},
    constants::BLANK_TERM_ID,
    types::{Power, TermSettings, VariableName},
};

impl TermSettings {
    /// Sets the power/root pair; a root below 1 becomes 1.
    pub fn with_power(&self, exponent: i64, root: i64) -> Self {
        Self {
            power: Power::new(exponent, root),
            ..self.clone()
        }
    }

    pub fn with_power_order(&self, power_order: bool) -> Self {
        Self {
            power_order,
            ..self.clone()
        }
    }

    pub fn with_variable_name(&self, variable_name: VariableName) -> Self {
        Self {
            variable_name,
            ..self.clone()
        }
    }

    /// Sets the exponent id of coefficient `index`. Out of range indices are ignored.
    pub fn with_term_id(&self, index: usize, id: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.term_ids.get_mut(index) {
            *slot = id.into();
        }
        next
    }

    /// Replaces every exponent id. Length and blanks are repaired on normalization.
    pub fn with_term_ids(&self, term_ids: Vec<String>) -> Self {
        Self {
            term_ids,
            ..self.clone()
        }
    }
}

impl Container for TermSettings {
    /// Matches `term_ids` to the coefficient count and writes `"0"` for blank ids.
    fn normalize(&self, ctx: &NodeContext<'_>) -> Self {
        let sync = CountSync::<TermSettings>::new(BLANK_TERM_ID.to_string(), ctx.mode)
            .with_make_item(&blank_term_id);
        let mut next = sync.reconcile(self).unwrap_or_else(|| self.clone());

        for id in &mut next.term_ids {
            if id.trim().is_empty() {
                *id = BLANK_TERM_ID.to_string();
            }
        }

        trace!(path = %ctx.path, term_ids = ?next.term_ids, "Normalized term");
        next
    }

    fn preserve(&self, base: Self) -> Self {
        Self {
            coefficients: self.coefficients.clone(),
            term_ids: self.term_ids.clone(),
            variable_name: self.variable_name,
            ..base
        }
    }
}
