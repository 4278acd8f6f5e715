//! Integration test: CSV on disk → load → train_and_evaluate.
//!
//! Covers determinism of the split and predictions, accuracy bounds and the
//! stage each kind of bad input fails in.

mod common;

use common::csv_fixture;
use phishlens_core::config::{ForestConfig, MaxFeatures, TrainConfig};
use phishlens_core::split::train_test_split;
use phishlens_core::{load, train_and_evaluate, Error, Stage, Value};

fn small_forest() -> TrainConfig {
    TrainConfig {
        forest: ForestConfig {
            n_trees: 25,
            ..ForestConfig::default()
        },
        ..TrainConfig::default()
    }
}

#[test]
fn ten_row_dataset_is_reproducible() {
    let fixture = csv_fixture::write(csv_fixture::TEN_ROWS);
    let cfg = TrainConfig::default();

    let first = train_and_evaluate(&load(&fixture.path).unwrap(), &cfg).unwrap();
    let second = train_and_evaluate(&load(&fixture.path).unwrap(), &cfg).unwrap();

    assert_eq!(first.split.test.len(), 2);
    assert_eq!(first.split.train.len(), 8);
    assert_eq!(first.split, second.split);
    assert_eq!(first.predictions, second.predictions);
    assert_eq!(first.accuracy.to_bits(), second.accuracy.to_bits());
    assert_eq!(first.report, second.report);

    // The partition only depends on row count and seed.
    assert_eq!(first.split, train_test_split(10, 0.2, 42).unwrap());
    for label in &first.predictions {
        assert!(matches!(label, Value::Number(n) if *n == 1.0 || *n == -1.0));
    }
}

#[test]
fn tied_leaves_do_not_change_results_between_runs() {
    let fixture = csv_fixture::write(&csv_fixture::contradictory(40));
    let dataset = load(&fixture.path).unwrap();
    let cfg = TrainConfig::default();

    let first = train_and_evaluate(&dataset, &cfg).unwrap();
    for _ in 0..10 {
        let again = train_and_evaluate(&dataset, &cfg).unwrap();
        assert_eq!(again.predictions, first.predictions);
        assert_eq!(again.accuracy.to_bits(), first.accuracy.to_bits());
        assert_eq!(again.report, first.report);
    }
}

#[test]
fn accuracy_is_a_fraction() {
    let fixture = csv_fixture::write(&csv_fixture::separable(60));
    let dataset = load(&fixture.path).unwrap();
    assert_eq!(dataset.shape(), (60, 5));

    let mut cfg = small_forest();
    cfg.forest.max_features = MaxFeatures::All;
    let eval = train_and_evaluate(&dataset, &cfg).unwrap();
    assert!((0.0..=1.0).contains(&eval.accuracy));
    assert_eq!(eval.split.test.len(), 12);
    assert_eq!(eval.report.support, 12);
    assert_eq!(eval.predictions.len(), 12);
    // Every tree sees f0, which alone separates the classes.
    assert!(eval.accuracy > 0.9, "accuracy {}", eval.accuracy);
}

#[test]
fn report_lists_labels_as_written() {
    let fixture = csv_fixture::write(&csv_fixture::separable(40));
    let eval = train_and_evaluate(&load(&fixture.path).unwrap(), &small_forest()).unwrap();
    let labels: Vec<&str> = eval.report.classes.iter().map(|c| c.label.as_str()).collect();
    assert!(labels.iter().all(|l| *l == "-1" || *l == "1"));
    let text = eval.report.to_string();
    assert!(text.contains("precision"));
    assert!(text.contains("weighted avg"));
}

#[test]
fn different_seed_changes_the_split() {
    let fixture = csv_fixture::write(&csv_fixture::separable(50));
    let dataset = load(&fixture.path).unwrap();
    let mut other = small_forest();
    other.split_seed = 7;
    let a = train_and_evaluate(&dataset, &small_forest()).unwrap();
    let b = train_and_evaluate(&dataset, &other).unwrap();
    assert_ne!(a.split.test, b.split.test);
}

#[test]
fn nonexistent_path_fails_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("data/phishing_dataset.csv")).unwrap_err();
    assert!(matches!(err, Error::DatasetNotFound { .. }));
    assert_eq!(err.stage(), Stage::Load);
}

#[test]
fn missing_label_column_fails_at_split() {
    let fixture = csv_fixture::write("a,b,c\n1,2,3\n4,5,6\n7,8,9\n");
    let dataset = load(&fixture.path).unwrap();
    let err = train_and_evaluate(&dataset, &TrainConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingLabelColumn { .. }));
    assert_eq!(err.stage(), Stage::Split);
}

#[test]
fn single_row_is_insufficient() {
    let fixture = csv_fixture::write("a,Result\n1,1\n");
    let dataset = load(&fixture.path).unwrap();
    let err = train_and_evaluate(&dataset, &TrainConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { rows: 1, .. }));
}

#[test]
fn text_feature_is_invalid() {
    let fixture = csv_fixture::write("url,Result\nhttp://a.example,1\nhttp://b.example,-1\n");
    let dataset = load(&fixture.path).unwrap();
    let err = train_and_evaluate(&dataset, &TrainConfig::default()).unwrap_err();
    match err {
        Error::InvalidFeatureType { column, row, .. } => {
            assert_eq!(column, "url");
            assert_eq!(row, 0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_label_column() {
    let csv = "label,x\n1,0.1\n0,5.0\n1,0.2\n0,5.1\n1,0.3\n0,5.2\n";
    let fixture = csv_fixture::write(csv);
    let cfg = TrainConfig {
        label_column: "label".into(),
        ..small_forest()
    };
    let eval = train_and_evaluate(&load(&fixture.path).unwrap(), &cfg).unwrap();
    assert_eq!(eval.split.test.len(), 2);
}
