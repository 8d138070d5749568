use std::sync::Arc;

use mathforge::{
    Document, MathObjectKind, Mode, Settings,
    defaults::{DefaultTable, RawModeDefaults},
    types::{
        CoefficientSettings, CoefficientsSettings, EquationSettings, InequalitySettings,
        NumberSet, Range, SetSettings,
    },
};

use crate::helpers::*;

fn natural_coefficient() -> CoefficientSettings {
    CoefficientSettings {
        number_set: NumberSet::Natural,
        range: Range::new(1.0, 5.0),
        ..CoefficientSettings::default()
    }
}

/// The builtin table with a complex coefficient default added.
fn table_with_complex_coefficient() -> DefaultTable {
    let entries = DefaultTable::builtin()
        .entries()
        .into_iter()
        .map(|(kind, mut raw)| {
            if kind == MathObjectKind::Coefficient {
                raw.complex = Some(natural_coefficient().into());
            }
            (kind, raw)
        });
    DefaultTable::new(entries).expect("Failed to build default table")
}

#[test]
fn test_builtin_complex_entries() {
    let table = DefaultTable::builtin();
    for kind in MathObjectKind::ALL {
        assert_eq!(table.has_complex(*kind), kind.is_relation(), "{kind}");
    }
    assert_eq!(
        table.get(MathObjectKind::Equation, Mode::Complex),
        Settings::from(EquationSettings::complex_default())
    );
    assert_eq!(
        table.get(MathObjectKind::Inequality, Mode::Complex),
        Settings::from(InequalitySettings::complex_default())
    );
}

#[test]
fn test_every_kind_falls_back_to_simple() {
    let table = DefaultTable::builtin();
    for kind in MathObjectKind::ALL {
        let simple = table.get(*kind, Mode::Simple);
        assert_eq!(simple.kind(), *kind);
        assert_eq!(simple, Settings::default_for(*kind));
        if !table.has_complex(*kind) {
            assert_eq!(table.get(*kind, Mode::Complex), simple);
        }
    }
}

#[test]
fn test_table_without_a_kind_cannot_be_built() {
    let entries = DefaultTable::builtin()
        .entries()
        .into_iter()
        .filter(|(kind, _)| *kind != MathObjectKind::Interval);
    let err = DefaultTable::new(entries).unwrap_err();
    assert!(err.is_missing_default());
    assert_eq!(err.kind(), MathObjectKind::Interval);

    let err: mathforge::Error = err.into();
    assert!(err.is_configuration_error());
    assert_eq!(err.module(), "defaults");
}

#[test]
fn test_table_entries_deserialize_from_json() {
    let json = serde_json::to_string(&DefaultTable::builtin().entries()).unwrap();
    let entries: Vec<(MathObjectKind, RawModeDefaults)> = serde_json::from_str(&json).unwrap();
    let table = DefaultTable::new(entries).expect("Failed to build default table");
    assert_eq!(table, DefaultTable::builtin());
}

#[test]
fn test_entry_under_wrong_key_is_rejected() {
    let entries = DefaultTable::builtin().entries().into_iter().map(|(kind, raw)| {
        if kind == MathObjectKind::Set {
            let wrong = RawModeDefaults {
                simple: CoefficientsSettings::default().into(),
                complex: None,
            };
            (kind, wrong)
        } else {
            (kind, raw)
        }
    });
    let err = DefaultTable::new(entries).unwrap_err();
    assert!(err.is_kind_mismatch());
}

#[test]
fn test_custom_complex_default_fills_new_coefficients() {
    let table = Arc::new(table_with_complex_coefficient());
    let mut document = Document::builder(MathObjectKind::Set)
        .defaults(table)
        .build()
        .expect("Failed to create document");

    assert_eq!(
        document.toggle_mode(&coefficients()).expect("Failed to toggle"),
        Mode::Complex
    );
    document
        .set_count(&coefficients(), 3)
        .expect("Failed to set count");

    let set: SetSettings = read_as(&document, &mathforge::path::NodePath::new());
    assert_eq!(set.coefficients.coefficients[0], CoefficientSettings::default());
    assert_eq!(set.coefficients.coefficients[1], natural_coefficient());
    assert_eq!(set.coefficients.coefficients[2], natural_coefficient());
}

#[test]
fn test_custom_complex_default_is_used_on_switch() {
    let table = Arc::new(table_with_complex_coefficient());
    let mut document = Document::builder(MathObjectKind::Coefficient)
        .defaults(table)
        .build()
        .expect("Failed to create document");

    document
        .switch_mode(&mathforge::path::NodePath::new(), Mode::Complex)
        .expect("Failed to switch mode");

    // Number set and range are kept; everything else comes from the complex default.
    let coefficient: CoefficientSettings = read_as(&document, &mathforge::path::NodePath::new());
    assert_eq!(coefficient.number_set, NumberSet::Integer);
    assert_eq!(coefficient.range, Range::default());
}
