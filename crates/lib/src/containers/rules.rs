//! Number set constraints on coefficient representation and rules.

use std::collections::BTreeSet;

use crate::{
    constants::PRIME_SCAN_LIMIT,
    types::{CoefficientRule, Mode, NumberSet, Range, RepresentationType},
};

/// Display order of representation options.
const REPRESENTATION_ORDER: [RepresentationType; 5] = [
    RepresentationType::Decimal,
    RepresentationType::Fraction,
    RepresentationType::Mixed,
    RepresentationType::Root,
    RepresentationType::Logarithm,
];

/// Representations a number set can be displayed in, preferred first.
pub fn allowed_representations(number_set: NumberSet) -> &'static [RepresentationType] {
    match number_set {
        NumberSet::Natural | NumberSet::Integer => &[RepresentationType::Decimal],
        NumberSet::Rational => &[
            RepresentationType::Fraction,
            RepresentationType::Mixed,
            RepresentationType::Decimal,
        ],
        NumberSet::Irrational => &[RepresentationType::Root, RepresentationType::Logarithm],
        NumberSet::Real => &REPRESENTATION_ORDER,
    }
}

/// The representation forced in simple mode.
pub fn default_representation(number_set: NumberSet) -> RepresentationType {
    match number_set {
        NumberSet::Rational => RepresentationType::Fraction,
        NumberSet::Irrational => RepresentationType::Root,
        NumberSet::Natural | NumberSet::Integer | NumberSet::Real => RepresentationType::Decimal,
    }
}

/// Representation options to offer, in display order. Empty in simple mode.
pub fn representation_options(number_set: NumberSet, mode: Mode) -> Vec<RepresentationType> {
    if mode == Mode::Simple {
        return Vec::new();
    }
    let allowed = allowed_representations(number_set);
    REPRESENTATION_ORDER
        .into_iter()
        .filter(|option| allowed.contains(option))
        .collect()
}

/// Whether two coefficient rules can be selected together.
pub fn rules_compatible(a: CoefficientRule, b: CoefficientRule) -> bool {
    use CoefficientRule::*;

    if a == b {
        return true;
    }
    let conflicts = |x: CoefficientRule, y: CoefficientRule| match x {
        Odd => matches!(y, Even | Nonzero),
        Positive => matches!(y, Negative | Nonzero),
        Negative => matches!(y, Nonzero | Prime),
        Unit => matches!(y, Nonzero | Prime | Even),
        Prime => matches!(y, Square | Cube),
        Even | Square | Cube | Nonzero => false,
    };
    !(conflicts(a, b) || conflicts(b, a))
}

fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Rules that cannot apply to `number_set` within `range`. Always empty in simple mode.
pub fn disabled_rules(number_set: NumberSet, range: Range, mode: Mode) -> Vec<CoefficientRule> {
    use CoefficientRule::*;

    if mode == Mode::Simple {
        return Vec::new();
    }

    if matches!(
        number_set,
        NumberSet::Real | NumberSet::Rational | NumberSet::Irrational
    ) {
        return CoefficientRule::ALL
            .iter()
            .copied()
            .filter(|rule| !matches!(rule, Positive | Negative | Nonzero))
            .collect();
    }

    let mut disabled = BTreeSet::new();
    match number_set {
        NumberSet::Integer => {
            disabled.insert(Prime);
        }
        NumberSet::Natural => {
            disabled.extend([Positive, Negative, Nonzero]);
        }
        _ => {}
    }

    let (min, max) = (range.min(), range.max());
    if min > 0.0 {
        disabled.extend([Negative, Nonzero]);
    } else if max < 0.0 {
        disabled.extend([Positive, Nonzero]);
    } else if min == 0.0 && max == 0.0 {
        disabled.extend([Positive, Negative, Nonzero, Odd, Even, Prime, Square, Cube]);
    }

    if !range.contains(1.0) && !range.contains(-1.0) {
        disabled.insert(Unit);
    }

    if number_set == NumberSet::Natural && !range.contains(2.0) {
        let low = (min.ceil() as i64).max(2);
        let high = (max.floor() as i64).min(PRIME_SCAN_LIMIT);
        if !(low..=high).any(is_prime) {
            disabled.insert(Prime);
        }
    }

    disabled.into_iter().collect()
}
