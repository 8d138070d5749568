//! Collection count synchronization.
//!
//! Several settings shapes pair a count with an array: a coefficient collection's
//! `collection_count` and `coefficients`, a term's coefficient count and its
//! `term_ids`. [`synchronize`] reconciles one array against a target length, and
//! [`CountSync`] wraps it for any [`Counted`] shape so that an explicit count edit and
//! a reactive repair after some other edit run through the same code path.

use tracing::debug;

use crate::{
    constants::BLANK_TERM_ID,
    types::{
        CoefficientSettings, CoefficientsSettings, ExpressionElement, ExpressionSettings, Mode,
        TermSettings, TermsSettings,
    },
};

/// Builds the item for a new slot, given the items so far and the node's mode.
pub type MakeItem<'a, T> = &'a dyn Fn(&[T], Mode) -> T;

/// Returns `items` resized to exactly `target` elements.
///
/// - Equal length: an equal copy.
/// - Too long: truncated from the end.
/// - Too short: each new slot is filled by `make_item` if supplied, else by a clone of
///   `items[0]` in `simple` mode, else by a clone of `default_item`.
///
/// `make_item` sees the array as built so far, including slots it already filled.
pub fn synchronize<T: Clone>(
    items: &[T],
    target: usize,
    default_item: &T,
    mode: Mode,
    make_item: Option<MakeItem<'_, T>>,
) -> Vec<T> {
    if items.len() >= target {
        return items[..target].to_vec();
    }

    let mut synced = Vec::with_capacity(target);
    synced.extend_from_slice(items);
    while synced.len() < target {
        let item = match (make_item, mode, items.first()) {
            (Some(make), _, _) => make(synced.as_slice(), mode),
            (None, Mode::Simple, Some(first)) => first.clone(),
            _ => default_item.clone(),
        };
        synced.push(item);
    }
    synced
}

/// A settings shape holding a count and an array that must match it.
pub trait Counted: Clone {
    /// Element type of the array.
    type Item: Clone;

    /// The count the array must match.
    fn count(&self) -> usize;

    /// Stores a new count. Shapes whose count is derived from elsewhere ignore this.
    fn set_count(&mut self, count: usize);

    /// The array.
    fn items(&self) -> &[Self::Item];

    /// Replaces the array.
    fn set_items(&mut self, items: Vec<Self::Item>);

    /// Whether the array length matches the count.
    fn is_synced(&self) -> bool {
        self.items().len() == self.count()
    }
}

/// Runs after a count change, with the previous and new array lengths.
pub type OnCountChange<'a, C> = &'a dyn Fn(&mut C, usize, usize);

/// Count synchronization for one [`Counted`] node.
///
/// [`CountSync::reconcile`] is the reactive trigger, run after any edit;
/// [`CountSync::set_count`] is the explicit trigger. Both resize the array with
/// [`synchronize`] and then run `on_count_change` if the length changed, so the
/// count, the array and any dependent field are written back together.
pub struct CountSync<'a, C: Counted> {
    default_item: C::Item,
    mode: Mode,
    make_item: Option<MakeItem<'a, C::Item>>,
    on_count_change: Option<OnCountChange<'a, C>>,
}

impl<'a, C: Counted> CountSync<'a, C> {
    /// Synchronizes with `default_item` as the fallback fill for `mode`.
    pub fn new(default_item: C::Item, mode: Mode) -> Self {
        Self {
            default_item,
            mode,
            make_item: None,
            on_count_change: None,
        }
    }

    /// Fills new slots with `make_item` instead of cloning.
    pub fn with_make_item(mut self, make_item: MakeItem<'a, C::Item>) -> Self {
        self.make_item = Some(make_item);
        self
    }

    /// Updates dependent fields whenever the length changes.
    pub fn on_count_change(mut self, hook: OnCountChange<'a, C>) -> Self {
        self.on_count_change = Some(hook);
        self
    }

    /// Repairs `current` if its array no longer matches its count.
    ///
    /// Returns `None` when nothing needed to change.
    pub fn reconcile(&self, current: &C) -> Option<C> {
        if current.is_synced() {
            return None;
        }
        Some(self.set_count(current, current.count()))
    }

    /// Sets the count to `count` and resizes the array to match.
    pub fn set_count(&self, current: &C, count: usize) -> C {
        let previous = current.items().len();
        let items = synchronize(
            current.items(),
            count,
            &self.default_item,
            self.mode,
            self.make_item,
        );
        let mut next = current.clone();
        next.set_count(count);
        next.set_items(items);

        let synced = next.items().len();
        if synced != previous {
            debug!(previous, count = synced, mode = %self.mode, "Resynchronized collection");
            if let Some(hook) = self.on_count_change {
                hook(&mut next, previous, synced);
            }
        }
        next
    }
}

impl Counted for CoefficientsSettings {
    type Item = CoefficientSettings;

    fn count(&self) -> usize {
        self.collection_count
    }

    fn set_count(&mut self, count: usize) {
        self.collection_count = count;
    }

    fn items(&self) -> &[CoefficientSettings] {
        &self.coefficients
    }

    fn set_items(&mut self, items: Vec<CoefficientSettings>) {
        self.coefficients = items;
    }
}

/// A term's exponent ids follow its coefficient count.
impl Counted for TermSettings {
    type Item = String;

    fn count(&self) -> usize {
        self.coefficients.collection_count
    }

    fn set_count(&mut self, _count: usize) {}

    fn items(&self) -> &[String] {
        &self.term_ids
    }

    fn set_items(&mut self, items: Vec<String>) {
        self.term_ids = items;
    }
}

impl Counted for TermsSettings {
    type Item = TermSettings;

    fn count(&self) -> usize {
        self.terms.len()
    }

    fn set_count(&mut self, _count: usize) {}

    fn items(&self) -> &[TermSettings] {
        &self.terms
    }

    fn set_items(&mut self, items: Vec<TermSettings>) {
        self.terms = items;
    }
}

impl Counted for ExpressionSettings {
    type Item = ExpressionElement;

    fn count(&self) -> usize {
        self.expressions.len()
    }

    fn set_count(&mut self, _count: usize) {}

    fn items(&self) -> &[ExpressionElement] {
        &self.expressions
    }

    fn set_items(&mut self, items: Vec<ExpressionElement>) {
        self.expressions = items;
    }
}

/// Fill for new exponent id slots.
pub fn blank_term_id(_items: &[String], _mode: Mode) -> String {
    BLANK_TERM_ID.to_string()
}
