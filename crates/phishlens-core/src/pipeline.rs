//! Train/evaluate pipeline: feature/label split → train/test split → fit →
//! predict → report.

use ndarray::Axis;

use crate::config::TrainConfig;
use crate::dataset::{Dataset, Value};
use crate::error::Result;
use crate::forest::RandomForest;
use crate::matrix::FeatureTable;
use crate::metrics::ClassificationReport;
use crate::split::{self, Split};

/// Outcome of one training run. The fitted model itself is not kept.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub accuracy: f64,
    pub report: ClassificationReport,
    pub split: Split,
    /// Predicted label for each row of `split.test`, in the same order.
    pub predictions: Vec<Value>,
}

/// Run the whole pipeline on an already loaded dataset.
///
/// Deterministic: the same dataset and config always produce the same split,
/// forest, predictions and metrics.
pub fn train_and_evaluate(dataset: &Dataset, cfg: &TrainConfig) -> Result<Evaluation> {
    cfg.validate()?;

    let table = FeatureTable::from_dataset(dataset, &cfg.label_column)?;
    let split = split::train_test_split(table.n_rows(), cfg.test_size, cfg.split_seed)?;

    let x_train = table.records.select(Axis(0), &split.train);
    let y_train = table.targets.select(Axis(0), &split.train);
    let x_test = table.records.select(Axis(0), &split.test);
    let y_test = table.targets.select(Axis(0), &split.test);

    let forest = RandomForest::fit(&x_train, &y_train, table.labels.n_classes(), &cfg.forest)?;
    let y_pred = forest.predict(&x_test)?;

    let y_true = y_test.to_vec();
    let y_pred = y_pred.to_vec();
    let report = ClassificationReport::compute(&y_true, &y_pred, &table.labels)?;

    let predictions = y_pred
        .iter()
        .map(|&c| table.labels.decode(c).cloned().unwrap_or(Value::Missing))
        .collect();

    tracing::info!(
        train = split.train.len(),
        test = split.test.len(),
        accuracy = report.accuracy,
        "evaluation finished"
    );

    Ok(Evaluation {
        accuracy: report.accuracy,
        report,
        split,
        predictions,
    })
}
