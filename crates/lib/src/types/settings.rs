//! Settings shapes, one per [`MathObjectKind`].
//!
//! These are plain data: no handles, no cycles, JSON-serializable with `serde`.
//! The `Default` impl of every shape is its canonical `simple` default.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    CapitalLetter, CoefficientRule, CoefficientsRule, CombinationType, FunctionName,
    InequalityType, IntervalType, MathObjectKind, NumberSet, Power, Range, RepresentationType,
    VariableName,
};

/// Settings of a single coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientSettings {
    /// The set of numbers the coefficient belongs to.
    pub number_set: NumberSet,
    /// The format used to display the coefficient.
    pub representation_type: RepresentationType,
    /// Rules the coefficient must satisfy.
    pub rules: BTreeSet<CoefficientRule>,
    /// The allowed value range.
    pub range: Range,
}

impl Default for CoefficientSettings {
    fn default() -> Self {
        Self {
            number_set: NumberSet::Integer,
            representation_type: RepresentationType::Decimal,
            rules: BTreeSet::new(),
            range: Range::default(),
        }
    }
}

/// Settings of a named collection of coefficients.
///
/// `coefficients.len() == collection_count` holds after every engine update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientsSettings {
    /// Number of coefficients in the collection, at least 1.
    pub collection_count: usize,
    /// Rules across the whole collection.
    pub rules: BTreeSet<CoefficientsRule>,
    /// One settings record per coefficient.
    pub coefficients: Vec<CoefficientSettings>,
}

impl CoefficientsSettings {
    /// A collection of `count` copies of `coefficient`.
    pub fn repeated(coefficient: CoefficientSettings, count: usize) -> Self {
        Self {
            collection_count: count,
            rules: BTreeSet::new(),
            coefficients: vec![coefficient; count],
        }
    }
}

impl Default for CoefficientsSettings {
    fn default() -> Self {
        Self::repeated(CoefficientSettings::default(), 1)
    }
}

/// Settings of a single term such as `a_1 x^2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSettings {
    /// Coefficients of the term.
    pub coefficients: CoefficientsSettings,
    /// Extra power/root applied to the term.
    pub power: Power,
    /// One exponent id per coefficient; blank ids read as `"0"`.
    pub term_ids: Vec<String>,
    /// If true the power wraps the root, otherwise the root wraps the power.
    pub power_order: bool,
    /// The variable symbol.
    pub variable_name: VariableName,
}

impl Default for TermSettings {
    fn default() -> Self {
        Self {
            coefficients: CoefficientsSettings::default(),
            power: Power::IDENTITY,
            term_ids: vec!["2".to_string()],
            power_order: true,
            variable_name: VariableName::X,
        }
    }
}

/// Settings of a combination of terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsSettings {
    /// The combined terms, at least one.
    pub terms: Vec<TermSettings>,
    /// Extra power/root applied to the combination.
    pub power: Power,
    /// If true the power wraps the root, otherwise the root wraps the power.
    pub power_order: bool,
    /// How the terms are combined.
    pub combination_type: CombinationType,
}

impl Default for TermsSettings {
    fn default() -> Self {
        Self {
            terms: vec![TermSettings::default(), TermSettings::default()],
            power: Power::IDENTITY,
            power_order: true,
            combination_type: CombinationType::Addition,
        }
    }
}

/// One element of an expression: a term or a combination of terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpressionElement {
    Term(TermSettings),
    Terms(TermsSettings),
}

impl ExpressionElement {
    /// The node kind of this element.
    pub fn kind(&self) -> MathObjectKind {
        match self {
            ExpressionElement::Term(_) => MathObjectKind::Term,
            ExpressionElement::Terms(_) => MathObjectKind::Terms,
        }
    }
}

impl Default for ExpressionElement {
    fn default() -> Self {
        ExpressionElement::Term(TermSettings::default())
    }
}

/// Settings of an expression.
///
/// The combination type always matches the element count, see
/// [`CombinationType::is_valid_for`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionSettings {
    /// The elements making up the expression.
    pub expressions: Vec<ExpressionElement>,
    /// How the elements are combined.
    pub combination_type: CombinationType,
    /// Extra power/root applied to the whole expression.
    pub power: Power,
    /// If true the power wraps the root, otherwise the root wraps the power.
    pub power_order: bool,
}

impl ExpressionSettings {
    /// An expression built from `elements` with the given combination.
    pub fn of(expressions: Vec<ExpressionElement>, combination_type: CombinationType) -> Self {
        Self {
            expressions,
            combination_type,
            power: Power::IDENTITY,
            power_order: true,
        }
    }
}

impl Default for ExpressionSettings {
    fn default() -> Self {
        Self::of(vec![ExpressionElement::default()], CombinationType::None)
    }
}

/// Settings of a function `f(x) = ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSettings {
    /// The function symbol.
    pub function_name: FunctionName,
    /// The argument symbol.
    pub variable_name: VariableName,
    /// The function body.
    pub expression: ExpressionSettings,
}

impl Default for FunctionSettings {
    fn default() -> Self {
        Self {
            function_name: FunctionName::F,
            variable_name: VariableName::X,
            expression: ExpressionSettings::default(),
        }
    }
}

/// The sides of an equation or inequality.
///
/// One expression in simple mode (both sides implied), a left and a right
/// expression in complex mode. Serialized as a one- or two-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sides {
    Two([ExpressionSettings; 2]),
    One([ExpressionSettings; 1]),
}

impl Sides {
    /// A single implicit side.
    pub fn one(expression: ExpressionSettings) -> Self {
        Sides::One([expression])
    }

    /// An explicit left and right side.
    pub fn two(left: ExpressionSettings, right: ExpressionSettings) -> Self {
        Sides::Two([left, right])
    }

    /// Number of sides, 1 or 2.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always false; a relation has at least one side.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The sides as a slice.
    pub fn as_slice(&self) -> &[ExpressionSettings] {
        match self {
            Sides::One(sides) => sides,
            Sides::Two(sides) => sides,
        }
    }

    /// The side at `index`.
    pub fn get(&self, index: usize) -> Option<&ExpressionSettings> {
        self.as_slice().get(index)
    }

    /// A copy with the side at `index` replaced, or `None` if out of range.
    pub fn with_side(&self, index: usize, side: ExpressionSettings) -> Option<Sides> {
        let mut next = self.clone();
        let slot = match &mut next {
            Sides::One(sides) => sides.get_mut(index),
            Sides::Two(sides) => sides.get_mut(index),
        }?;
        *slot = side;
        Some(next)
    }
}

fn simple_relation_sides() -> Sides {
    Sides::one(ExpressionSettings::of(
        vec![ExpressionElement::default(), ExpressionElement::default()],
        CombinationType::Addition,
    ))
}

/// Settings of an equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationSettings {
    pub sides: Sides,
}

impl EquationSettings {
    /// Canonical complex default: two sides, each one `Terms` element.
    pub fn complex_default() -> Self {
        let side = ExpressionSettings::of(
            vec![ExpressionElement::Terms(TermsSettings::default())],
            CombinationType::None,
        );
        Self {
            sides: Sides::two(side.clone(), side),
        }
    }
}

impl Default for EquationSettings {
    fn default() -> Self {
        Self {
            sides: simple_relation_sides(),
        }
    }
}

/// Settings of an inequality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InequalitySettings {
    pub sides: Sides,
    /// The comparison operator.
    pub inequality_type: InequalityType,
}

impl InequalitySettings {
    /// Canonical complex default: two sides, each one `Term` element.
    pub fn complex_default() -> Self {
        let side = ExpressionSettings::default();
        Self {
            sides: Sides::two(side.clone(), side),
            inequality_type: InequalityType::Less,
        }
    }
}

impl Default for InequalitySettings {
    fn default() -> Self {
        Self {
            sides: simple_relation_sides(),
            inequality_type: InequalityType::Less,
        }
    }
}

/// Settings of a point; the coefficients are its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointSettings {
    pub name: CapitalLetter,
    pub show_name: bool,
    pub coefficients: CoefficientsSettings,
}

impl Default for PointSettings {
    fn default() -> Self {
        Self {
            name: CapitalLetter::A,
            show_name: true,
            coefficients: CoefficientsSettings::repeated(CoefficientSettings::default(), 2),
        }
    }
}

/// Settings of a set; the coefficients are its elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSettings {
    pub name: CapitalLetter,
    pub show_name: bool,
    pub coefficients: CoefficientsSettings,
}

impl Default for SetSettings {
    fn default() -> Self {
        Self {
            name: CapitalLetter::A,
            show_name: true,
            coefficients: CoefficientsSettings::default(),
        }
    }
}

/// Settings of an interval; the coefficients are its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalSettings {
    pub name: CapitalLetter,
    pub show_name: bool,
    pub coefficients: CoefficientsSettings,
    /// Endpoint inclusion.
    pub interval_type: IntervalType,
    /// Minimum distance between the endpoints.
    pub minimum_length: u32,
}

impl Default for IntervalSettings {
    fn default() -> Self {
        let mut coefficients = CoefficientsSettings::repeated(CoefficientSettings::default(), 2);
        coefficients.rules = [CoefficientsRule::Increasing, CoefficientsRule::Neq].into();
        Self {
            name: CapitalLetter::A,
            show_name: true,
            coefficients,
            interval_type: IntervalType::Closed,
            minimum_length: 1,
        }
    }
}

/// A settings node of any kind.
///
/// Serialized with an explicit `kind` discriminant next to the shape's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Settings {
    Coefficient(CoefficientSettings),
    Coefficients(CoefficientsSettings),
    Term(TermSettings),
    Terms(TermsSettings),
    Expression(ExpressionSettings),
    Function(FunctionSettings),
    Equation(EquationSettings),
    Inequality(InequalitySettings),
    Point(PointSettings),
    Set(SetSettings),
    Interval(IntervalSettings),
}

/// Run `$body` with `$c` bound to the shape inside any [`Settings`] variant.
macro_rules! with_container {
    ($settings:expr, $c:ident => $body:expr) => {
        match $settings {
            $crate::types::Settings::Coefficient($c) => $body,
            $crate::types::Settings::Coefficients($c) => $body,
            $crate::types::Settings::Term($c) => $body,
            $crate::types::Settings::Terms($c) => $body,
            $crate::types::Settings::Expression($c) => $body,
            $crate::types::Settings::Function($c) => $body,
            $crate::types::Settings::Equation($c) => $body,
            $crate::types::Settings::Inequality($c) => $body,
            $crate::types::Settings::Point($c) => $body,
            $crate::types::Settings::Set($c) => $body,
            $crate::types::Settings::Interval($c) => $body,
        }
    };
}
pub(crate) use with_container;

macro_rules! settings_conversions {
    ($($variant:ident($shape:ty)),+ $(,)?) => {
        $(
            impl From<$shape> for Settings {
                fn from(shape: $shape) -> Self {
                    Settings::$variant(shape)
                }
            }

            impl TryFrom<Settings> for $shape {
                type Error = Settings;

                fn try_from(settings: Settings) -> Result<Self, Self::Error> {
                    match settings {
                        Settings::$variant(shape) => Ok(shape),
                        other => Err(other),
                    }
                }
            }
        )+

        impl Settings {
            /// The canonical simple default for `kind`.
            pub fn default_for(kind: MathObjectKind) -> Settings {
                match kind {
                    $(MathObjectKind::$variant => Settings::$variant(<$shape>::default()),)+
                }
            }

            /// The discriminant of this node.
            pub fn kind(&self) -> MathObjectKind {
                match self {
                    $(Settings::$variant(_) => MathObjectKind::$variant,)+
                }
            }
        }
    };
}

settings_conversions! {
    Coefficient(CoefficientSettings),
    Coefficients(CoefficientsSettings),
    Term(TermSettings),
    Terms(TermsSettings),
    Expression(ExpressionSettings),
    Function(FunctionSettings),
    Equation(EquationSettings),
    Inequality(InequalitySettings),
    Point(PointSettings),
    Set(SetSettings),
    Interval(IntervalSettings),
}

impl From<ExpressionElement> for Settings {
    fn from(element: ExpressionElement) -> Self {
        match element {
            ExpressionElement::Term(term) => Settings::Term(term),
            ExpressionElement::Terms(terms) => Settings::Terms(terms),
        }
    }
}

impl TryFrom<Settings> for ExpressionElement {
    type Error = Settings;

    fn try_from(settings: Settings) -> Result<Self, Self::Error> {
        match settings {
            Settings::Term(term) => Ok(ExpressionElement::Term(term)),
            Settings::Terms(terms) => Ok(ExpressionElement::Terms(terms)),
            other => Err(other),
        }
    }
}

/// The exchange record for one math object.
///
/// Carries the settings tree plus the generation metadata stored next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathInput {
    pub settings: Settings,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub dependency: String,
    #[serde(default)]
    pub example: String,
}

impl MathInput {
    /// Wraps `settings` with empty metadata.
    pub fn new(settings: impl Into<Settings>) -> Self {
        Self {
            settings: settings.into(),
            priority: 0,
            dependency: String::new(),
            example: String::new(),
        }
    }

    /// The kind of the wrapped settings.
    pub fn kind(&self) -> MathObjectKind {
        self.settings.kind()
    }
}
