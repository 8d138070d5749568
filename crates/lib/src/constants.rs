//! Constants used throughout the Mathforge library.
//!
//! This module provides central definitions for container path suffixes and the
//! numeric fallbacks used when user input has to be repaired.

/// Suffix appended when descending into a node's coefficient collection.
pub const COEFFICIENTS_SUFFIX: &str = "-coefficients";

/// Prefix of the suffix for one coefficient; the element index follows.
pub const COEFFICIENT_SUFFIX: &str = "-coefficient-";

/// Prefix of the suffix for one term of a `Terms` node; the element index follows.
pub const TERM_SUFFIX: &str = "-term-";

/// Prefix of the suffix for one element of an `Expression`; the element index follows.
pub const ELEMENT_SUFFIX: &str = "-expr-";

/// Prefix of the suffix for one side of an equation or inequality; the side index follows.
pub const SIDE_SUFFIX: &str = "-side-";

/// Suffix appended when descending into a function body.
pub const EXPRESSION_SUFFIX: &str = "-expression";

/// Exponent id written in place of a blank term id.
pub const BLANK_TERM_ID: &str = "0";

/// Lower range bound used when a range edit omits or garbles its minimum.
pub const FALLBACK_RANGE_MIN: f64 = 0.0;

/// Upper range bound used when a range edit omits or garbles its maximum.
pub const FALLBACK_RANGE_MAX: f64 = 10.0;

/// Largest value scanned when looking for a prime inside a range.
pub const PRIME_SCAN_LIMIT: i64 = 100;

/// Minimum expression count shown while an expression is locked under a simple relation.
pub const SIMPLE_RELATION_MIN_ELEMENTS: usize = 2;
