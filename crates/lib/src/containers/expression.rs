use tracing::{debug, trace};

use super::{Container, Controls, CountControl, NodeContext, Shape};
use crate::{
    collection::CountSync,
    constants::SIMPLE_RELATION_MIN_ELEMENTS,
    types::{CombinationType, ExpressionElement, ExpressionSettings, Power, TermSettings},
};

/// An expression directly under a simple-mode relation has its count fixed.
fn is_simple_parent(ctx: &NodeContext<'_>) -> bool {
    ctx.parent
        .as_ref()
        .is_some_and(|parent| parent.kind.is_relation() && parent.mode.is_simple())
}

fn recompute_combination(expression: &mut ExpressionSettings, _previous: usize, count: usize) {
    expression.combination_type = expression.combination_type.after_count_change(count);
}

impl ExpressionSettings {
    /// Sets the number of elements, at least 1, and recomputes the combination type.
    ///
    /// New elements are default terms, filled according to the parent's mode.
    /// Ignored under a simple-mode equation or inequality.
    pub fn with_count(&self, ctx: &NodeContext<'_>, count: usize) -> Self {
        if is_simple_parent(ctx) {
            debug!(path = %ctx.path, count, "Ignoring count edit under simple relation");
            return self.clone();
        }
        let fill_mode = ctx.parent_mode();
        let default_term = TermSettings::defaults(ctx.defaults).get(fill_mode).clone();
        CountSync::<ExpressionSettings>::new(ExpressionElement::Term(default_term), fill_mode)
            .on_count_change(&recompute_combination)
            .set_count(self, count.max(1))
    }

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

    /// Sets the combination type, clamped to the options valid for the element count.
    pub fn with_combination_type(&self, combination_type: CombinationType) -> Self {
        Self {
            combination_type: combination_type.clamp_for(self.expressions.len()),
            ..self.clone()
        }
    }

    /// Replaces the element at `index`. Out of range indices are ignored.
    pub fn with_element(&self, index: usize, element: ExpressionElement) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.expressions.get_mut(index) {
            *slot = element;
        }
        next
    }
}

impl Container for ExpressionSettings {
    fn normalize(&self, ctx: &NodeContext<'_>) -> Self {
        let mut next = self.clone();
        if next.expressions.is_empty() {
            next.expressions
                .push(ExpressionElement::Term(ctx.default_of::<TermSettings>()));
        }
        next.combination_type = next.combination_type.clamp_for(next.expressions.len());
        trace!(
            path = %ctx.path,
            count = next.expressions.len(),
            combination = %next.combination_type,
            "Normalized expression"
        );
        next
    }

    fn controls(&self, ctx: &NodeContext<'_>) -> Controls {
        let locked = is_simple_parent(ctx);
        Controls {
            count: Some(CountControl {
                value: self.expressions.len(),
                min: if locked { SIMPLE_RELATION_MIN_ELEMENTS } else { 1 },
                locked,
            }),
            combination_options: CombinationType::valid_for(self.expressions.len()),
            ..Controls::default()
        }
    }
}
