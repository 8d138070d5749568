use mathforge::{
    MathObjectKind, Mode,
    mode::ModeRegistry,
    path::{NodePath, Step},
    types::{
        CoefficientRule, CoefficientSettings, EquationSettings, ExpressionElement,
        ExpressionSettings, InequalitySettings, MathInput, NumberSet, RepresentationType,
        TermSettings,
    },
};

use crate::helpers::*;

// ===== INHERITANCE =====

#[test]
fn test_lookup_resolves_exact_then_prefix_then_fallback() {
    let mut registry = ModeRegistry::with_fallback(Mode::Complex);
    registry.set_mode("0-term", Mode::Simple);
    registry.set_mode("0-term-coefficients", Mode::Complex);
    registry.set_mode("0-term-coefficients-coefficient-0", Mode::Simple);

    assert_eq!(registry.get_mode("0-term-coefficients-coefficient-0"), Mode::Simple);
    assert_eq!(registry.get_mode("0-term-coefficients-coefficient-1"), Mode::Complex);
    assert_eq!(registry.get_mode("0-term-other"), Mode::Simple);
    assert_eq!(registry.get_mode("1-term"), Mode::Complex);
}

#[test]
fn test_prefix_match_is_literal() {
    let mut registry = ModeRegistry::new();
    registry.set_mode("0-set-coefficients-coefficient-1", Mode::Complex);

    assert_eq!(
        registry.get_mode("0-set-coefficients-coefficient-10"),
        Mode::Complex
    );
    assert_eq!(
        registry.get_mode("0-set-coefficients-coefficient-2"),
        Mode::Simple
    );
}

#[test]
fn test_document_nodes_inherit_from_ancestors() {
    let mut document = new_document(MathObjectKind::Term);
    document.set_mode(&NodePath::new(), Mode::Complex);

    assert_eq!(document.get_mode(&coefficients()), Mode::Complex);
    assert_eq!(document.get_mode(&coefficient(0)), Mode::Complex);

    document.set_mode(&coefficients(), Mode::Simple);
    assert_eq!(document.get_mode(&NodePath::new()), Mode::Complex);
    assert_eq!(document.get_mode(&coefficient(0)), Mode::Simple);
}

#[test]
fn test_registries_are_per_document() {
    let mut first = new_document(MathObjectKind::Term);
    let second = new_document(MathObjectKind::Term);
    first.set_mode(&NodePath::new(), Mode::Complex);

    assert_eq!(second.get_mode(&NodePath::new()), Mode::Simple);
    assert!(second.modes().is_empty());
}

// ===== SEEDING =====

#[test]
fn test_imported_expression_seeds_element_collections() {
    let expression = ExpressionSettings::of(
        vec![ExpressionElement::default(), ExpressionElement::default()],
        mathforge::types::CombinationType::Addition,
    );
    let document = mathforge::Document::from_input(MathInput::new(expression))
        .expect("Failed to open input");

    let element = NodePath::from([Step::Element(1)]);
    assert_eq!(document.get_mode(&NodePath::new()), Mode::Simple);
    assert_eq!(document.get_mode(&element), Mode::Simple);
    assert_eq!(
        document.get_mode(&element.child(Step::Coefficients)),
        Mode::Complex
    );
    assert_eq!(
        document.get_mode(&element.child(Step::Coefficients).push(Step::Coefficient(0))),
        Mode::Complex
    );
}

#[test]
fn test_imported_two_sided_relation_opens_complex() {
    let document = mathforge::Document::from_input(MathInput::new(
        InequalitySettings::complex_default(),
    ))
    .expect("Failed to open input");
    assert_eq!(document.get_mode(&NodePath::new()), Mode::Complex);

    let document = mathforge::Document::from_input(MathInput::new(EquationSettings::default()))
        .expect("Failed to open input");
    assert_eq!(document.get_mode(&NodePath::new()), Mode::Simple);
}

// ===== SWITCHING =====

#[test]
fn test_coefficient_switch_keeps_number_set_and_range() {
    let start = CoefficientSettings::default()
        .with_number_set(NumberSet::Rational)
        .with_range(&[1.0, 4.0])
        .with_rules([CoefficientRule::Positive]);
    let mut document = document_with(start);

    document
        .switch_mode(&NodePath::new(), Mode::Complex)
        .expect("Failed to switch mode");

    let coefficient: CoefficientSettings = read_as(&document, &NodePath::new());
    assert_eq!(document.get_mode(&NodePath::new()), Mode::Complex);
    assert_eq!(coefficient.number_set, NumberSet::Rational);
    assert_eq!(coefficient.range.min(), 1.0);
    assert_eq!(coefficient.range.max(), 4.0);
    assert!(coefficient.rules.is_empty());
    assert_eq!(coefficient.representation_type, RepresentationType::Decimal);
}

#[test]
fn test_switch_to_current_mode_changes_nothing() {
    let start = CoefficientSettings::default().with_rules([CoefficientRule::Even]);
    let mut document = document_with(start);
    let before = document.settings().clone();

    document
        .switch_mode(&NodePath::new(), Mode::Simple)
        .expect("Failed to switch mode");
    assert_eq!(document.settings(), &before);
    assert_eq!(document.modes().registered("0-coefficient"), None);
}

#[test]
fn test_complex_equation_switches_to_one_side() {
    let mut document = seeded_document_with(EquationSettings::complex_default());
    assert_eq!(document.get_mode(&NodePath::new()), Mode::Complex);

    assert_eq!(
        document.toggle_mode(&NodePath::new()).expect("Failed to toggle"),
        Mode::Simple
    );
    let equation: EquationSettings = read_as(&document, &NodePath::new());
    assert_eq!(equation.sides.len(), 1);
    assert_eq!(equation, EquationSettings::default());
}

#[test]
fn test_relation_round_trip_is_lossy() {
    let mut document = new_document(MathObjectKind::Inequality);
    let side = NodePath::from([Step::Side(0)]);
    let element = side.child(Step::Element(0));
    document
        .edit::<TermSettings, _>(&element, |term, _| {
            term.with_variable_name(mathforge::types::VariableName::Y)
        })
        .expect("Failed to edit term");
    let edited = document.settings().clone();

    document.toggle_mode(&NodePath::new()).expect("Failed to toggle");
    let inequality: InequalitySettings = read_as(&document, &NodePath::new());
    assert_eq!(inequality.sides.len(), 2);

    document.toggle_mode(&NodePath::new()).expect("Failed to toggle");
    assert_ne!(document.settings(), &edited);
    assert_eq!(
        document.settings(),
        &document.get_default(MathObjectKind::Inequality, Mode::Simple)
    );
}

#[test]
fn test_coefficients_switch_retags_children() {
    let mut document = new_document(MathObjectKind::Term);
    document
        .set_count(&coefficients(), 2)
        .expect("Failed to set count");

    document.toggle_mode(&coefficients()).expect("Failed to toggle");
    for index in 0..2 {
        let container = document.container_path(&coefficient(index));
        assert_eq!(document.modes().registered(container.as_str()), Some(Mode::Complex));
    }

    document.toggle_mode(&coefficients()).expect("Failed to toggle");
    assert_eq!(document.get_mode(&coefficient(1)), Mode::Simple);
}

#[test]
fn test_term_switch_keeps_coefficients_and_ids() {
    let mut document = new_document(MathObjectKind::Term);
    document
        .set_count(&coefficients(), 2)
        .expect("Failed to set count");
    document
        .edit::<TermSettings, _>(&NodePath::new(), |term, _| {
            term.with_term_id(1, "3").with_power(2, 3)
        })
        .expect("Failed to edit term");

    document.toggle_mode(&NodePath::new()).expect("Failed to toggle");
    let term: TermSettings = read_as(&document, &NodePath::new());
    assert_eq!(term.term_ids, vec!["2", "3"]);
    assert_eq!(term.coefficients.collection_count, 2);
    assert_eq!(term.power, mathforge::types::Power::IDENTITY);
}
