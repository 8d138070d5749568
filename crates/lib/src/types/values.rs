//! Numeric pairs that repair themselves on construction.
//!
//! Both types serialize as two-element JSON arrays, `[exponent, root]` and
//! `[min, max]`, and go through the same normalization when deserialized.

use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_RANGE_MAX, FALLBACK_RANGE_MIN};

/// A power/root pair applied to a term or combination.
///
/// The root is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Power {
    exponent: i64,
    root: i64,
}

impl Power {
    /// The neutral pair `(1, 1)`.
    pub const IDENTITY: Power = Power {
        exponent: 1,
        root: 1,
    };

    /// Creates a pair, raising a root below 1 to 1.
    pub fn new(exponent: i64, root: i64) -> Self {
        Self {
            exponent,
            root: root.max(1),
        }
    }

    /// The exponent the base is raised to.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// The root taken of the base.
    pub fn root(&self) -> i64 {
        self.root
    }
}

impl Default for Power {
    fn default() -> Self {
        Power::IDENTITY
    }
}

impl From<[i64; 2]> for Power {
    fn from(pair: [i64; 2]) -> Self {
        Power::new(pair[0], pair[1])
    }
}

impl From<Power> for [i64; 2] {
    fn from(power: Power) -> Self {
        [power.exponent, power.root]
    }
}

/// A closed numeric range `[min, max]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<f64>>", into = "[f64; 2]")]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Creates a range from two bounds.
    ///
    /// Non-finite bounds fall back to `0` and `10`; reversed bounds are swapped.
    pub fn new(min: f64, max: f64) -> Self {
        Self::from_bounds(&[Some(min), Some(max)])
    }

    /// Creates a range from loosely-typed bounds.
    ///
    /// A missing or non-finite minimum becomes `0`, a missing or non-finite
    /// maximum becomes `10`, extra bounds are ignored.
    pub fn from_bounds(bounds: &[Option<f64>]) -> Self {
        let pick = |index: usize, fallback: f64| {
            bounds
                .get(index)
                .copied()
                .flatten()
                .filter(|value| value.is_finite())
                .unwrap_or(fallback)
        };
        let min = pick(0, FALLBACK_RANGE_MIN);
        let max = pick(1, FALLBACK_RANGE_MAX);
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies inside the range, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for Range {
    fn default() -> Self {
        Range {
            min: -10.0,
            max: 10.0,
        }
    }
}

impl From<Vec<Option<f64>>> for Range {
    fn from(bounds: Vec<Option<f64>>) -> Self {
        Range::from_bounds(&bounds)
    }
}

impl From<Range> for [f64; 2] {
    fn from(range: Range) -> Self {
        [range.min, range.max]
    }
}
