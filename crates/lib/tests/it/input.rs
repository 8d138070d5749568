use mathforge::{
    Document, MathObjectKind, Mode,
    defaults::DefaultTable,
    input::{InputError, merge_with_defaults, parse_document},
    path::{NodePath, Step},
    types::{
        CoefficientSettings, CombinationType, ExpressionSettings, NumberSet, Settings,
        TermSettings,
    },
};
use serde_json::json;

#[test]
fn test_partial_coefficient_is_completed() {
    let table = DefaultTable::builtin();
    let merged = merge_with_defaults(
        MathObjectKind::Coefficient,
        &json!({ "numberSet": "natural", "range": [5, -5] }),
        &table,
    )
    .expect("Failed to merge");

    let Settings::Coefficient(coefficient) = merged.settings else {
        panic!("expected a coefficient");
    };
    assert_eq!(coefficient.number_set, NumberSet::Natural);
    assert_eq!((coefficient.range.min(), coefficient.range.max()), (-5.0, 5.0));
    assert_eq!(merged.missing, vec!["representationType", "rules"]);
}

#[test]
fn test_complete_input_reports_nothing() {
    let table = DefaultTable::builtin();
    let full = serde_json::to_value(Settings::from(TermSettings::default())).unwrap();
    let merged =
        merge_with_defaults(MathObjectKind::Term, &full, &table).expect("Failed to merge");

    assert!(merged.missing.is_empty());
    assert_eq!(merged.settings, Settings::from(TermSettings::default()));
}

#[test]
fn test_untagged_expression_elements_are_classified() {
    let table = DefaultTable::builtin();
    let input = json!({
        "kind": "expression",
        "expressions": [
            { "coefficients": { "collectionCount": 2 }, "termIds": ["1"] },
            { "terms": [{ "termIds": ["3"] }], "combinationType": "multiplication" }
        ]
    });
    let merged =
        merge_with_defaults(MathObjectKind::Expression, &input, &table).expect("Failed to merge");

    let Settings::Expression(expression) = &merged.settings else {
        panic!("expected an expression");
    };
    assert_eq!(expression.expressions.len(), 2);
    assert_eq!(expression.combination_type, CombinationType::Addition);

    let first: Settings = expression.expressions[0].clone().into();
    let Settings::Term(term) = first else {
        panic!("expected a term");
    };
    assert_eq!(term.coefficients.coefficients.len(), 2);
    assert_eq!(term.term_ids, vec!["1", "0"]);
    assert_eq!(expression.expressions[1].kind(), MathObjectKind::Terms);

    assert!(merged.missing.contains(&"combinationType".to_string()));
    assert!(merged.missing.contains(&"expressions[0].coefficients.rules".to_string()));
    assert!(merged.missing.contains(&"expressions[0].power".to_string()));
    assert!(!merged.missing.iter().any(|key| key.ends_with("kind")));
}

#[test]
fn test_unknown_keys_are_dropped() {
    let table = DefaultTable::builtin();
    let merged = merge_with_defaults(
        MathObjectKind::Set,
        &json!({ "kind": "set", "name": "B", "legacyColor": "red" }),
        &table,
    )
    .expect("Failed to merge");

    let value = serde_json::to_value(&merged.settings).unwrap();
    assert!(value.get("legacyColor").is_none());
    assert_eq!(value["name"], "B");
}

#[test]
fn test_rejected_inputs() {
    let table = DefaultTable::builtin();

    let err = merge_with_defaults(MathObjectKind::Term, &json!([1, 2]), &table).unwrap_err();
    assert!(matches!(err, InputError::NotAnObject { found: "an array" }));

    let err = merge_with_defaults(MathObjectKind::Term, &json!({ "kind": "point" }), &table)
        .unwrap_err();
    assert!(err.is_kind_mismatch());

    let err = merge_with_defaults(MathObjectKind::Term, &json!({ "kind": "polygon" }), &table)
        .unwrap_err();
    assert!(err.is_kind_error());

    let err = merge_with_defaults(
        MathObjectKind::Coefficient,
        &json!({ "numberSet": "complex" }),
        &table,
    )
    .unwrap_err();
    assert!(err.is_invalid());

    let err: mathforge::Error = err.into();
    assert!(err.is_input_error());
    assert_eq!(err.module(), "input");
}

#[test]
fn test_parse_document_reads_record_metadata() {
    let table = DefaultTable::builtin();
    let record = json!({
        "settings": { "kind": "function", "functionName": "h" },
        "priority": 2,
        "dependency": "0-point",
        "example": "h(x) = 3x^2"
    });
    let imported = parse_document(&record, &table).expect("Failed to parse");

    assert_eq!(imported.input.kind(), MathObjectKind::Function);
    assert_eq!(imported.input.priority, 2);
    assert_eq!(imported.input.dependency, "0-point");
    assert_eq!(imported.input.example, "h(x) = 3x^2");
    assert!(imported.missing.contains(&"expression".to_string()));
}

#[test]
fn test_parse_document_accepts_bare_settings() {
    let table = DefaultTable::builtin();
    let imported =
        parse_document(&json!({ "kind": "interval" }), &table).expect("Failed to parse");
    assert_eq!(imported.input.kind(), MathObjectKind::Interval);
    assert_eq!(imported.input.priority, 0);
    assert!(imported.input.example.is_empty());

    let err = parse_document(&json!({ "settings": { "name": "A" } }), &table).unwrap_err();
    assert!(matches!(err, InputError::MissingKind));
}

#[test]
fn test_imported_two_sided_inequality_opens_in_complex_mode() {
    let table = DefaultTable::builtin();
    let record = json!({
        "settings": {
            "kind": "inequality",
            "inequalityType": "geq",
            "sides": [
                { "expressions": [{ "coefficients": {}, "termIds": ["1"] }] },
                { "expressions": [{ "terms": [{}, {}] }] }
            ]
        }
    });
    let imported = parse_document(&record, &table).expect("Failed to parse");
    let document = Document::from_input(imported.input).expect("Failed to open input");

    assert_eq!(document.get_mode(&NodePath::new()), Mode::Complex);
    let right = document
        .read(&NodePath::from([Step::Side(1)]))
        .expect("Failed to read side");
    let right = ExpressionSettings::try_from(right).expect("expected an expression");
    assert_eq!(right.expressions[0].kind(), MathObjectKind::Terms);

    let element = NodePath::from([Step::Side(0), Step::Element(0)]);
    assert_eq!(document.get_mode(&element), Mode::Simple);
    let coefficient = document
        .read(&element.child(Step::Coefficients).push(Step::Coefficient(0)))
        .expect("Failed to read coefficient");
    assert_eq!(coefficient, Settings::from(CoefficientSettings::default()));
}
