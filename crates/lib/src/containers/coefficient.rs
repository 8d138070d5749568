use std::collections::BTreeSet;

use tracing::trace;

use super::{
    Container, Controls, NodeContext,
    rules::{
        allowed_representations, default_representation, disabled_rules,
        representation_options, rules_compatible,
    },
};
use crate::types::{CoefficientRule, CoefficientSettings, Mode, NumberSet, Range, RepresentationType};

impl CoefficientSettings {
    /// Sets the number set. The representation follows on normalization.
    pub fn with_number_set(&self, number_set: NumberSet) -> Self {
        Self {
            number_set,
            ..self.clone()
        }
    }

    pub fn with_representation_type(&self, representation_type: RepresentationType) -> Self {
        Self {
            representation_type,
            ..self.clone()
        }
    }

    /// Sets the range from raw bounds, see [`Range::from_bounds`].
    pub fn with_range(&self, bounds: &[f64]) -> Self {
        let bounds: Vec<Option<f64>> = bounds.iter().copied().map(Some).collect();
        Self {
            range: Range::from_bounds(&bounds),
            ..self.clone()
        }
    }

    /// Selects `rule`, dropping selected rules it conflicts with.
    ///
    /// Selecting an already selected rule deselects it.
    pub fn toggle_rule(&self, rule: CoefficientRule) -> Self {
        let rules = if self.rules.contains(&rule) {
            self.rules.iter().copied().filter(|r| *r != rule).collect()
        } else {
            self.rules
                .iter()
                .copied()
                .filter(|existing| rules_compatible(*existing, rule))
                .chain(std::iter::once(rule))
                .collect()
        };
        Self {
            rules,
            ..self.clone()
        }
    }

    /// Replaces the rule selection as given.
    pub fn with_rules(&self, rules: impl IntoIterator<Item = CoefficientRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            ..self.clone()
        }
    }
}

impl Container for CoefficientSettings {
    fn normalize(&self, ctx: &NodeContext<'_>) -> Self {
        let representation_type = match ctx.mode {
            Mode::Simple => default_representation(self.number_set),
            Mode::Complex => {
                let allowed = allowed_representations(self.number_set);
                if allowed.contains(&self.representation_type) {
                    self.representation_type
                } else {
                    allowed
                        .first()
                        .copied()
                        .unwrap_or(RepresentationType::Decimal)
                }
            }
        };

        let disabled = disabled_rules(self.number_set, self.range, ctx.mode);
        let rules: BTreeSet<CoefficientRule> = self
            .rules
            .iter()
            .copied()
            .filter(|rule| !disabled.contains(rule))
            .collect();

        trace!(path = %ctx.path, mode = %ctx.mode, "Normalized coefficient");
        Self {
            representation_type,
            rules,
            ..self.clone()
        }
    }

    fn controls(&self, ctx: &NodeContext<'_>) -> Controls {
        Controls {
            representation_options: representation_options(self.number_set, ctx.mode),
            disabled_rules: disabled_rules(self.number_set, self.range, ctx.mode),
            ..Controls::default()
        }
    }

    fn preserve(&self, base: Self) -> Self {
        Self {
            number_set: self.number_set,
            range: self.range,
            ..base
        }
    }
}
