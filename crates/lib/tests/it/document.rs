use mathforge::{
    Document, Error, MathObjectKind, Mode, Settings,
    path::{NodePath, Step},
    render,
    types::{
        CoefficientSettings, CoefficientsSettings, EquationSettings, ExpressionSettings,
        FunctionName, FunctionSettings, NumberSet, SetSettings, TermSettings, TermsSettings,
    },
};

use crate::helpers::*;

fn deep_leaf() -> NodePath {
    NodePath::from([
        Step::Side(1),
        Step::Element(0),
        Step::Term(1),
        Step::Coefficients,
        Step::Coefficient(0),
    ])
}

#[test]
fn test_deep_update_reaches_the_root() {
    let mut document = seeded_document_with(EquationSettings::complex_default());
    let before = document.settings().clone();
    let slice = CoefficientSettings::default().with_number_set(NumberSet::Natural);

    document
        .update(&deep_leaf(), slice.into())
        .expect("Failed to update leaf");

    let leaf: CoefficientSettings = read_as(&document, &deep_leaf());
    assert_eq!(leaf.number_set, NumberSet::Natural);

    // Every other branch is unchanged.
    let left = NodePath::from([Step::Side(0)]);
    assert_eq!(
        document.read(&left).expect("Failed to read side"),
        before.descend(&left).expect("Failed to read side")
    );
    let sibling = NodePath::from([Step::Side(1), Step::Element(0), Step::Term(0)]);
    assert_eq!(
        document.read(&sibling).expect("Failed to read term"),
        before.descend(&sibling).expect("Failed to read term")
    );
}

#[test]
fn test_update_repairs_the_slice() {
    let mut document = new_document(MathObjectKind::Terms);
    let mut slice = TermSettings::default();
    slice.coefficients.collection_count = 2;
    let path = NodePath::from([Step::Term(0)]);

    document
        .update(&path, slice.into())
        .expect("Failed to update term");

    let term: TermSettings = read_as(&document, &path);
    assert_eq!(term.coefficients.coefficients.len(), 2);
    assert_eq!(term.term_ids, vec!["2", "0"]);
}

#[test]
fn test_parent_is_renormalized_after_child_update() {
    let mut document = new_document(MathObjectKind::Expression);
    document.set_count(&NodePath::new(), 2).expect("Failed to set count");

    let element = NodePath::from([Step::Element(1)]);
    document
        .update(&element, TermsSettings::default().into())
        .expect("Failed to update element");

    let expression: ExpressionSettings = read_as(&document, &NodePath::new());
    assert_eq!(expression.expressions[1].kind(), MathObjectKind::Terms);
    let terms: TermsSettings = read_as(&document, &element);
    assert_eq!(terms.terms.len(), 2);
}

#[test]
fn test_slice_of_wrong_kind_is_rejected() {
    let mut document = new_document(MathObjectKind::Term);
    let before = document.settings().clone();

    let err = document
        .update(&coefficients(), CoefficientSettings::default().into())
        .unwrap_err();
    assert!(err.is_kind_mismatch());
    assert_eq!(err.module(), "tree");
    assert_eq!(document.settings(), &before);
}

#[test]
fn test_edit_of_wrong_shape_is_rejected() {
    let mut document = new_document(MathObjectKind::Set);
    let err = document
        .edit::<TermSettings, _>(&coefficients(), |term, _| term.clone())
        .unwrap_err();
    assert!(err.is_kind_mismatch());
}

#[test]
fn test_missing_paths_are_reported() {
    let mut document = new_document(MathObjectKind::Equation);
    let missing_side = NodePath::from([Step::Side(1)]);

    let err = document.read(&missing_side).unwrap_err();
    assert!(err.is_not_found());
    let err = document.set_count(&missing_side, 2).unwrap_err();
    assert!(err.is_not_found());
    let err = document.switch_mode(&missing_side, Mode::Complex).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_function_edits_keep_the_body() {
    let mut document = new_document(MathObjectKind::Function);
    let body = NodePath::from([Step::Expression]);
    document.set_count(&body, 2).expect("Failed to set count");
    document
        .edit::<FunctionSettings, _>(&NodePath::new(), |function, _| {
            function.with_function_name(FunctionName::G)
        })
        .expect("Failed to edit function");

    let function: FunctionSettings = read_as(&document, &NodePath::new());
    assert_eq!(function.function_name, FunctionName::G);
    assert_eq!(function.expression.expressions.len(), 2);

    let err = document.switch_mode(&NodePath::new(), Mode::Complex).unwrap_err();
    assert!(matches!(err, Error::Tree(ref tree_err) if tree_err.is_unsupported()));
}

#[test]
fn test_root_index_shapes_container_paths() {
    let document = Document::builder(MathObjectKind::Set)
        .root_index(4)
        .build()
        .expect("Failed to create document");

    assert_eq!(
        document.container_path(&coefficient(1)).as_str(),
        "4-set-coefficients-coefficient-1"
    );
}

#[test]
fn test_fallback_mode_applies_to_unregistered_nodes() {
    let document = Document::builder(MathObjectKind::Equation)
        .fallback_mode(Mode::Complex)
        .build()
        .expect("Failed to create document");

    assert_eq!(document.get_mode(&NodePath::new()), Mode::Complex);
    let equation: EquationSettings = read_as(&document, &NodePath::new());
    assert_eq!(equation.sides.len(), 2);
}

#[test]
fn test_repair_applies_registered_modes() {
    let mut document = new_document(MathObjectKind::Coefficient);
    document
        .edit::<CoefficientSettings, _>(&NodePath::new(), |coefficient, _| {
            coefficient.with_range(&[2.0, 6.0]).with_rules([
                mathforge::types::CoefficientRule::Negative,
            ])
        })
        .expect("Failed to edit coefficient");
    let coefficient: CoefficientSettings = read_as(&document, &NodePath::new());
    assert_eq!(coefficient.rules.len(), 1);

    document.set_mode(&NodePath::new(), Mode::Complex);
    document.repair();
    let coefficient: CoefficientSettings = read_as(&document, &NodePath::new());
    assert!(coefficient.rules.is_empty());
}

#[test]
fn test_snapshot_restores_settings() {
    let mut document = new_document(MathObjectKind::Set);
    document.set_count(&coefficients(), 3).expect("Failed to set count");

    let json = document.to_json().expect("Failed to serialize");
    let restored = Document::from_json(&json).expect("Failed to restore");
    assert_eq!(restored.kind(), MathObjectKind::Set);
    assert_eq!(restored.settings(), document.settings());

    let set: SetSettings = read_as(&restored, &NodePath::new());
    assert_eq!(set.coefficients, CoefficientsSettings::repeated(CoefficientSettings::default(), 3));
}

#[test]
fn test_snapshot_of_two_sided_equation_reopens_complex() {
    let mut document = seeded_document_with(EquationSettings::complex_default());
    let term = NodePath::from([Step::Side(0), Step::Element(0), Step::Term(0)]);
    let edited = read_as::<TermSettings>(&document, &term).with_power(3, 1);
    document
        .update(&term, edited.into())
        .expect("Failed to update term");

    let json = document.to_json().expect("Failed to serialize");
    let mut restored = Document::from_json(&json).expect("Failed to restore");
    assert_eq!(restored.get_mode(&NodePath::new()), Mode::Complex);
    assert_eq!(restored.settings(), document.settings());

    // Complex sides keep an editable count.
    let side = NodePath::from([Step::Side(0)]);
    let ctx = restored.context(&side).expect("Failed to build context");
    let settings = restored.read(&side).expect("Failed to read side");
    let count = render::controls(&settings, &ctx)
        .count
        .expect("Side has a count control");
    assert!(!count.locked);

    // Toggling leaves complex instead of resetting the edited side.
    let mode = restored
        .toggle_mode(&NodePath::new())
        .expect("Failed to toggle");
    assert_eq!(mode, Mode::Simple);
    let equation: EquationSettings = read_as(&restored, &NodePath::new());
    assert_eq!(equation.sides.len(), 1);
}

#[test]
fn test_set_mode_on_relation_keeps_sides() {
    let mut document = seeded_document_with(EquationSettings::complex_default());
    document.set_mode(&NodePath::new(), Mode::Simple);

    let equation: EquationSettings = read_as(&document, &NodePath::new());
    assert_eq!(equation.sides.len(), 2);
    assert_eq!(document.get_mode(&NodePath::new()), Mode::Simple);

    // Only a switch changes the arity.
    document.set_mode(&NodePath::new(), Mode::Complex);
    document
        .switch_mode(&NodePath::new(), Mode::Simple)
        .expect("Failed to switch");
    let equation: EquationSettings = read_as(&document, &NodePath::new());
    assert_eq!(equation.sides.len(), 1);
}

#[test]
fn test_malformed_snapshot_is_a_serialization_error() {
    let err = Document::from_json("{\"kind\": \"set\", \"name\": 3}").unwrap_err();
    assert!(err.is_serialization_error());

    let err = Document::from_json("{\"kind\": \"polygon\"}").unwrap_err();
    assert!(err.is_serialization_error());
}

#[test]
fn test_get_default_matches_table() {
    let document = new_document(MathObjectKind::Inequality);
    assert_eq!(
        document.get_default(MathObjectKind::Equation, Mode::Complex),
        Settings::from(EquationSettings::complex_default())
    );
}
