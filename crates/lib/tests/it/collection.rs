use mathforge::{
    MathObjectKind, Mode,
    collection::synchronize,
    path::NodePath,
    types::{CoefficientSettings, CoefficientsSettings, NumberSet, TermSettings},
};

use crate::helpers::*;

#[test]
fn test_synchronize_always_reaches_target() {
    let items = vec![1, 2, 3];
    for target in 0..8 {
        for mode in [Mode::Simple, Mode::Complex] {
            let synced = synchronize(&items, target, &0, mode, None);
            assert_eq!(synced.len(), target);
            let kept = target.min(items.len());
            assert_eq!(&synced[..kept], &items[..kept]);
        }
    }
}

#[test]
fn test_synchronize_empty_items_use_default_in_simple_mode() {
    let synced = synchronize(&[], 2, &"default", Mode::Simple, None);
    assert_eq!(synced, vec!["default", "default"]);
}

#[test]
fn test_simple_count_edit_clones_first_coefficient() {
    let mut document = document_with(integer_collection(2, -5.0, 5.0));
    document
        .set_count(&NodePath::new(), 4)
        .expect("Failed to set count");

    let collection: CoefficientsSettings = read_as(&document, &NodePath::new());
    assert_eq!(collection.collection_count, 4);
    assert_eq!(collection.coefficients.len(), 4);
    for coefficient in &collection.coefficients {
        assert_eq!(coefficient, &collection.coefficients[0]);
        assert_eq!(coefficient.range.min(), -5.0);
        assert_eq!(coefficient.range.max(), 5.0);
    }
}

#[test]
fn test_complex_count_edit_uses_table_default() {
    let mut document = document_with(integer_collection(2, -5.0, 5.0));
    document
        .switch_mode(&NodePath::new(), Mode::Complex)
        .expect("Failed to switch mode");
    document
        .set_count(&NodePath::new(), 4)
        .expect("Failed to set count");

    let collection: CoefficientsSettings = read_as(&document, &NodePath::new());
    assert_eq!(collection.coefficients.len(), 4);
    assert_eq!(collection.coefficients[0].range.min(), -5.0);
    assert_eq!(collection.coefficients[1].range.min(), -5.0);
    assert_eq!(collection.coefficients[2], CoefficientSettings::default());
    assert_eq!(collection.coefficients[3], CoefficientSettings::default());
}

#[test]
fn test_count_edit_shrinks_from_the_end() {
    let mut collection = integer_collection(3, 0.0, 1.0);
    collection.coefficients[0] = collection.coefficients[0].with_number_set(NumberSet::Natural);
    let mut document = document_with(collection);

    document
        .set_count(&NodePath::new(), 1)
        .expect("Failed to set count");
    let collection: CoefficientsSettings = read_as(&document, &NodePath::new());
    assert_eq!(collection.collection_count, 1);
    assert_eq!(collection.coefficients[0].number_set, NumberSet::Natural);
}

#[test]
fn test_count_below_one_is_raised() {
    let mut document = new_document(MathObjectKind::Set);
    document
        .set_count(&coefficients(), 0)
        .expect("Failed to set count");

    let collection: CoefficientsSettings = read_as(&document, &coefficients());
    assert_eq!(collection.collection_count, 1);
    assert_eq!(collection.coefficients.len(), 1);
}

#[test]
fn test_term_ids_follow_coefficient_count_edit() {
    let mut document = new_document(MathObjectKind::Term);
    document
        .set_count(&coefficients(), 3)
        .expect("Failed to set count");

    let term: TermSettings = read_as(&document, &NodePath::new());
    assert_eq!(term.coefficients.collection_count, 3);
    assert_eq!(term.coefficients.coefficients.len(), 3);
    assert_eq!(term.term_ids, vec!["2", "0", "0"]);

    document
        .set_count(&coefficients(), 1)
        .expect("Failed to set count");
    let term: TermSettings = read_as(&document, &NodePath::new());
    assert_eq!(term.term_ids, vec!["2"]);
}

#[test]
fn test_stale_count_is_repaired_on_load() {
    let mut collection = integer_collection(1, 0.0, 3.0);
    collection.collection_count = 3;
    let document = document_with(collection);

    let collection: CoefficientsSettings = read_as(&document, &NodePath::new());
    assert_eq!(collection.coefficients.len(), 3);
}
