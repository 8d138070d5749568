//! Node types and closed option sets.
//!
//! Every tag used by the settings tree is a closed set with a stable string name.
//! Those names are what appear in serialized settings and on the command line.
//!
//! # Core Types
//!
//! - [`MathObjectKind`] - The discriminant of a settings node
//! - [`Mode`] - The interface mode of a node (`simple` or `complex`)
//! - [`Settings`] - One settings shape per kind
//! - [`Power`] and [`Range`] - Self-repairing numeric pairs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod settings;
pub mod values;

pub use settings::{
    CoefficientSettings, CoefficientsSettings, EquationSettings, ExpressionElement,
    ExpressionSettings, FunctionSettings, InequalitySettings, IntervalSettings, MathInput,
    PointSettings, SetSettings, Settings, Sides, TermSettings, TermsSettings,
};
pub use values::{Power, Range};

pub(crate) use settings::with_container;

/// A string that is not a member of the closed set it was parsed as.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {set} '{value}'")]
pub struct UnknownOption {
    /// Name of the closed set
    pub set: &'static str,
    /// The rejected input
    pub value: String,
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant,)+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable string name of this member.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownOption {
                        set: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

closed_set! {
    /// The closed set of math object kinds.
    ///
    /// Each kind has exactly one settings shape, see [`Settings`].
    MathObjectKind {
        Coefficient => "coefficient",
        Coefficients => "coefficients",
        Term => "term",
        Terms => "terms",
        Expression => "expression",
        Function => "function",
        Equation => "equation",
        Inequality => "inequality",
        Point => "point",
        Set => "set",
        Interval => "interval",
    }
}

impl MathObjectKind {
    /// Position of this kind in [`MathObjectKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether nodes of this kind offer a simple/complex toggle.
    ///
    /// A function has no state of its own besides names; its body toggles itself.
    pub fn supports_mode_toggle(&self) -> bool {
        !matches!(self, MathObjectKind::Function)
    }

    /// Whether a mode switch replaces the whole node with the new mode's default.
    pub fn is_lossy_on_mode_switch(&self) -> bool {
        matches!(
            self,
            MathObjectKind::Terms
                | MathObjectKind::Expression
                | MathObjectKind::Equation
                | MathObjectKind::Inequality
        )
    }

    /// Kinds that lock the rules and count of their `Coefficients` child.
    pub fn locks_coefficients(&self) -> bool {
        matches!(self, MathObjectKind::Interval | MathObjectKind::Point)
    }

    /// Kinds whose children are one or two relation sides.
    pub fn is_relation(&self) -> bool {
        matches!(self, MathObjectKind::Equation | MathObjectKind::Inequality)
    }
}

closed_set! {
    /// Interface mode of a node.
    ///
    /// - `simple`: A reduced editor; relations hold one expression.
    /// - `complex`: Every field is editable; relations hold a left and a right side.
    Mode {
        Simple => "simple",
        Complex => "complex",
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Simple
    }
}

impl Mode {
    /// The other mode.
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Simple => Mode::Complex,
            Mode::Complex => Mode::Simple,
        }
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, Mode::Simple)
    }
}

closed_set! {
    /// The set of numbers a coefficient is drawn from.
    NumberSet {
        Real => "real",
        Rational => "rational",
        Irrational => "irrational",
        Integer => "integer",
        Natural => "natural",
    }
}

closed_set! {
    /// Display format of a coefficient.
    RepresentationType {
        Fraction => "fraction",
        Mixed => "mixed",
        Decimal => "decimal",
        Root => "root",
        Logarithm => "logarithm",
    }
}

closed_set! {
    /// Rules a single coefficient must satisfy.
    CoefficientRule {
        Odd => "odd",
        Even => "even",
        Square => "square",
        Cube => "cube",
        Prime => "prime",
        Nonzero => "nonzero",
        Positive => "positive",
        Negative => "negative",
        Unit => "unit",
    }
}

closed_set! {
    /// Rules across a whole coefficient collection.
    CoefficientsRule {
        Increasing => "increasing",
        Decreasing => "decreasing",
        Neq => "neq",
    }
}

closed_set! {
    /// How the parts of a `Terms` or `Expression` node are combined.
    CombinationType {
        Addition => "addition",
        Subtraction => "subtraction",
        Multiplication => "multiplication",
        Division => "division",
        Power => "power",
        RootSqDiv => "root_sq_div",
        None => "none",
    }
}

impl CombinationType {
    /// Combination types valid for an expression with `count` elements.
    ///
    /// One element allows `none` and `root_sq_div`, two allow everything else,
    /// three or more allow only the additive and multiplicative types.
    pub fn valid_for(count: usize) -> Vec<CombinationType> {
        CombinationType::ALL
            .iter()
            .copied()
            .filter(|option| option.is_valid_for(count))
            .collect()
    }

    /// Whether this type is allowed for `count` elements.
    pub fn is_valid_for(&self, count: usize) -> bool {
        match count {
            0 | 1 => matches!(self, CombinationType::None | CombinationType::RootSqDiv),
            2 => !matches!(self, CombinationType::None | CombinationType::RootSqDiv),
            _ => matches!(
                self,
                CombinationType::Addition
                    | CombinationType::Subtraction
                    | CombinationType::Multiplication
            ),
        }
    }

    /// Keep `self` if valid for `count`, else the lexically-first valid option.
    pub fn clamp_for(self, count: usize) -> CombinationType {
        if self.is_valid_for(count) {
            return self;
        }
        CombinationType::valid_for(count)
            .into_iter()
            .min_by_key(|option| option.as_str())
            .unwrap_or(CombinationType::None)
    }

    /// Combination type after an expression's element count changed.
    pub fn after_count_change(self, new_count: usize) -> CombinationType {
        if new_count == 1 {
            return CombinationType::None;
        }
        if matches!(self, CombinationType::None | CombinationType::RootSqDiv) {
            return CombinationType::Addition;
        }
        self.clamp_for(new_count)
    }
}

closed_set! {
    /// Endpoint inclusion of an interval.
    IntervalType {
        Open => "open",
        Closed => "closed",
        ClosedOpen => "closed_open",
        OpenClosed => "open_closed",
    }
}

closed_set! {
    /// Comparison operator of an inequality.
    InequalityType {
        Less => "less",
        Greater => "greater",
        Leq => "leq",
        Geq => "geq",
    }
}

closed_set! {
    /// Variable symbols available to terms and functions.
    VariableName {
        X => "x",
        Y => "y",
        Z => "z",
        A => "a",
        B => "b",
        C => "c",
        D => "d",
    }
}

closed_set! {
    /// Function name symbols.
    FunctionName {
        F => "f",
        G => "g",
        H => "h",
        P => "p",
        Q => "q",
        R => "r",
        S => "s",
        T => "t",
        V => "v",
    }
}

closed_set! {
    /// Display names of points, sets and intervals.
    CapitalLetter {
        A => "A", B => "B", C => "C", D => "D", E => "E", F => "F", G => "G",
        H => "H", I => "I", J => "J", K => "K", L => "L", M => "M", N => "N",
        O => "O", P => "P", Q => "Q", R => "R", S => "S", T => "T", U => "U",
        V => "V", W => "W", X => "X", Y => "Y", Z => "Z",
    }
}
