//! Canonical default settings per kind and interface mode.
//!
//! The [`DefaultTable`] is consulted whenever the engine needs a fresh node: on a
//! mode switch, when a collection grows without a clone source, and when partial
//! input is completed. Every kind in the closed set must have a `simple` entry;
//! a `complex` entry is optional and falls back to `simple` when absent.
//!
//! A table is validated once, when it is built. Lookups afterwards cannot fail.
//!
//! # Usage
//!
//! ```rust
//! use mathforge::defaults::DefaultTable;
//! use mathforge::{MathObjectKind, Mode, Settings};
//!
//! let table = DefaultTable::builtin();
//! let simple = table.get(MathObjectKind::Point, Mode::Simple);
//! let complex = table.get(MathObjectKind::Point, Mode::Complex);
//!
//! // Points have no complex entry, so both modes resolve to the same default.
//! assert_eq!(simple, complex);
//! assert!(table.has_complex(MathObjectKind::Equation));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::types::{
    CoefficientSettings, CoefficientsSettings, EquationSettings, ExpressionSettings,
    FunctionSettings, InequalitySettings, IntervalSettings, MathObjectKind, Mode, PointSettings,
    SetSettings, Settings, TermSettings, TermsSettings,
};

pub mod errors;

pub use errors::DefaultsError;

/// The defaults registered for one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeDefaults<S> {
    /// The canonical `simple` default, always present.
    pub simple: S,
    /// The canonical `complex` default, if the kind registers one.
    pub complex: Option<S>,
}

impl<S> ModeDefaults<S> {
    /// A kind with only a simple default.
    pub fn simple(simple: S) -> Self {
        Self {
            simple,
            complex: None,
        }
    }

    /// A kind with both defaults.
    pub fn both(simple: S, complex: S) -> Self {
        Self {
            simple,
            complex: Some(complex),
        }
    }

    /// The default for `mode`, falling back to `simple`.
    pub fn get(&self, mode: Mode) -> &S {
        match mode {
            Mode::Complex => self.complex.as_ref().unwrap_or(&self.simple),
            Mode::Simple => &self.simple,
        }
    }
}

/// An untyped table entry, checked against its key when the table is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawModeDefaults {
    pub simple: Settings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex: Option<Settings>,
}

fn typed<S>(expected: MathObjectKind, raw: RawModeDefaults) -> Result<ModeDefaults<S>, DefaultsError>
where
    S: TryFrom<Settings, Error = Settings>,
{
    let convert = |settings: Settings| {
        S::try_from(settings).map_err(|found| {
            error!(
                expected = %expected,
                found = %found.kind(),
                "Default table entry has the wrong kind"
            );
            DefaultsError::KindMismatch {
                expected,
                found: found.kind(),
            }
        })
    };
    Ok(ModeDefaults {
        simple: convert(raw.simple)?,
        complex: raw.complex.map(&convert).transpose()?,
    })
}

macro_rules! default_table {
    ($($field:ident: $variant:ident($shape:ty)),+ $(,)?) => {
        /// Canonical settings for every kind and interface mode.
        ///
        /// One typed entry per kind; a table missing any kind cannot be built.
        #[derive(Debug, Clone, PartialEq)]
        pub struct DefaultTable {
            $($field: ModeDefaults<$shape>,)+
        }

        impl DefaultTable {
            /// Builds a table from untyped entries.
            ///
            /// Fails if any kind in the closed set has no entry, or if an entry holds
            /// settings of a different kind than its key. Later duplicates replace
            /// earlier ones.
            pub fn new(
                entries: impl IntoIterator<Item = (MathObjectKind, RawModeDefaults)>,
            ) -> Result<Self, DefaultsError> {
                let mut entries: BTreeMap<MathObjectKind, RawModeDefaults> =
                    entries.into_iter().collect();
                Ok(Self {
                    $($field: {
                        let kind = MathObjectKind::$variant;
                        let raw = entries.remove(&kind).ok_or_else(|| {
                            error!(kind = %kind, "Default table is missing a kind");
                            DefaultsError::MissingDefault { kind }
                        })?;
                        typed::<$shape>(kind, raw)?
                    },)+
                })
            }

            /// The default for `kind` in `mode`, falling back to `simple`.
            pub fn get(&self, kind: MathObjectKind, mode: Mode) -> Settings {
                match kind {
                    $(MathObjectKind::$variant => self.$field.get(mode).clone().into(),)+
                }
            }

            /// Whether `kind` registers its own complex default.
            pub fn has_complex(&self, kind: MathObjectKind) -> bool {
                match kind {
                    $(MathObjectKind::$variant => self.$field.complex.is_some(),)+
                }
            }

            /// The table as untyped entries, in kind order.
            pub fn entries(&self) -> Vec<(MathObjectKind, RawModeDefaults)> {
                vec![$(
                    (
                        MathObjectKind::$variant,
                        RawModeDefaults {
                            simple: self.$field.simple.clone().into(),
                            complex: self.$field.complex.clone().map(Into::into),
                        },
                    ),
                )+]
            }

            $(
                #[doc = concat!("Typed defaults for `", stringify!($variant), "` nodes.")]
                pub fn $field(&self) -> &ModeDefaults<$shape> {
                    &self.$field
                }
            )+
        }
    };
}

default_table! {
    coefficient: Coefficient(CoefficientSettings),
    coefficients: Coefficients(CoefficientsSettings),
    term: Term(TermSettings),
    terms: Terms(TermsSettings),
    expression: Expression(ExpressionSettings),
    function: Function(FunctionSettings),
    equation: Equation(EquationSettings),
    inequality: Inequality(InequalitySettings),
    point: Point(PointSettings),
    set: Set(SetSettings),
    interval: Interval(IntervalSettings),
}

impl DefaultTable {
    /// The built-in table. Only equations and inequalities register a complex entry.
    pub fn builtin() -> Self {
        Self {
            coefficient: ModeDefaults::simple(CoefficientSettings::default()),
            coefficients: ModeDefaults::simple(CoefficientsSettings::default()),
            term: ModeDefaults::simple(TermSettings::default()),
            terms: ModeDefaults::simple(TermsSettings::default()),
            expression: ModeDefaults::simple(ExpressionSettings::default()),
            function: ModeDefaults::simple(FunctionSettings::default()),
            equation: ModeDefaults::both(
                EquationSettings::default(),
                EquationSettings::complex_default(),
            ),
            inequality: ModeDefaults::both(
                InequalitySettings::default(),
                InequalitySettings::complex_default(),
            ),
            point: ModeDefaults::simple(PointSettings::default()),
            set: ModeDefaults::simple(SetSettings::default()),
            interval: ModeDefaults::simple(IntervalSettings::default()),
        }
    }
}

impl Default for DefaultTable {
    fn default() -> Self {
        Self::builtin()
    }
}
