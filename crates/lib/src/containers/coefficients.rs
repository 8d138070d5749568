use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::{Container, Controls, CountControl, NodeContext, Shape};
use crate::{
    collection::CountSync,
    types::{CoefficientSettings, CoefficientsRule, CoefficientsSettings, MathObjectKind},
};

/// Whether the parent owns this collection's rules and count.
fn is_locked(ctx: &NodeContext<'_>) -> bool {
    ctx.parent_kind()
        .is_some_and(|kind| kind.locks_coefficients())
}

/// The rule set a locking parent imposes, if any.
fn forced_rules(ctx: &NodeContext<'_>) -> Option<BTreeSet<CoefficientsRule>> {
    match ctx.parent_kind()? {
        MathObjectKind::Interval => {
            Some([CoefficientsRule::Increasing, CoefficientsRule::Neq].into())
        }
        MathObjectKind::Point => Some(BTreeSet::new()),
        _ => None,
    }
}

impl CoefficientsSettings {
    /// Selects or deselects a collection rule.
    ///
    /// `increasing` and `decreasing` exclude each other. Ignored under a locking parent.
    pub fn toggle_rule(&self, ctx: &NodeContext<'_>, rule: CoefficientsRule) -> Self {
        if is_locked(ctx) {
            debug!(path = %ctx.path, rule = %rule, "Ignoring rule edit on locked collection");
            return self.clone();
        }
        let mut rules = self.rules.clone();
        if !rules.remove(&rule) {
            match rule {
                CoefficientsRule::Increasing => {
                    rules.remove(&CoefficientsRule::Decreasing);
                }
                CoefficientsRule::Decreasing => {
                    rules.remove(&CoefficientsRule::Increasing);
                }
                CoefficientsRule::Neq => {}
            }
            rules.insert(rule);
        }
        Self {
            rules,
            ..self.clone()
        }
    }

    /// Replaces the rule selection. Ignored under a locking parent.
    pub fn with_rules(
        &self,
        ctx: &NodeContext<'_>,
        rules: impl IntoIterator<Item = CoefficientsRule>,
    ) -> Self {
        if is_locked(ctx) {
            debug!(path = %ctx.path, "Ignoring rules edit on locked collection");
            return self.clone();
        }
        Self {
            rules: rules.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Sets the collection count, at least 1. Ignored under a locking parent.
    pub fn with_count(&self, ctx: &NodeContext<'_>, count: usize) -> Self {
        if is_locked(ctx) {
            debug!(path = %ctx.path, count, "Ignoring count edit on locked collection");
            return self.clone();
        }
        count_sync(ctx).set_count(self, count.max(1))
    }
}

fn count_sync(ctx: &NodeContext<'_>) -> CountSync<'static, CoefficientsSettings> {
    CountSync::new(
        CoefficientSettings::defaults(ctx.defaults)
            .get(ctx.mode)
            .clone(),
        ctx.mode,
    )
}

impl Container for CoefficientsSettings {
    fn normalize(&self, ctx: &NodeContext<'_>) -> Self {
        let mut next = self.clone();
        next.collection_count = next.collection_count.max(1);
        if let Some(synced) = count_sync(ctx).reconcile(&next) {
            next = synced;
        }

        if next.rules.contains(&CoefficientsRule::Increasing) {
            next.rules.remove(&CoefficientsRule::Decreasing);
        }
        if let Some(forced) = forced_rules(ctx) {
            next.rules = forced;
        }

        trace!(path = %ctx.path, count = next.collection_count, "Normalized coefficients");
        next
    }

    fn controls(&self, ctx: &NodeContext<'_>) -> Controls {
        let locked = is_locked(ctx);
        Controls {
            count: Some(CountControl {
                value: self.collection_count,
                min: 1,
                locked,
            }),
            rules_locked: locked,
            ..Controls::default()
        }
    }

    /// Every field survives a mode switch; the children are re-tagged by the caller.
    fn preserve(&self, _base: Self) -> Self {
        self.clone()
    }
}
