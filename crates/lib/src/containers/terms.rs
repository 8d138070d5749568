use tracing::trace;

use super::{Container, Controls, CountControl, NodeContext};
use crate::{
    collection::CountSync,
    types::{CombinationType, Power, TermSettings, TermsSettings},
};

impl TermsSettings {
    /// Sets the number of terms, at least 1.
    pub fn with_count(&self, ctx: &NodeContext<'_>, count: usize) -> Self {
        CountSync::<TermsSettings>::new(ctx.default_of::<TermSettings>(), ctx.mode)
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

    pub fn with_combination_type(&self, combination_type: CombinationType) -> Self {
        Self {
            combination_type,
            ..self.clone()
        }
    }
}

impl Container for TermsSettings {
    fn normalize(&self, ctx: &NodeContext<'_>) -> Self {
        let mut next = self.clone();
        if next.terms.is_empty() {
            next.terms.push(ctx.default_of::<TermSettings>());
        }
        trace!(path = %ctx.path, count = next.terms.len(), "Normalized terms");
        next
    }

    fn controls(&self, _ctx: &NodeContext<'_>) -> Controls {
        Controls {
            count: Some(CountControl {
                value: self.terms.len(),
                min: 1,
                locked: false,
            }),
            combination_options: CombinationType::ALL.to_vec(),
            ..Controls::default()
        }
    }
}
