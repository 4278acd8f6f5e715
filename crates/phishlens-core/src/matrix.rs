//! Feature/label separation: turns a [`Dataset`] into a numeric matrix and
//! dense class indices.

use ndarray::{Array1, Array2};

use crate::dataset::{Dataset, Value};
use crate::error::{Error, Result};

/// Distinct label values in sorted order; position = class index.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    classes: Vec<Value>,
}

impl LabelEncoder {
    /// Collect and sort the distinct labels.
    pub fn fit<'a>(labels: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut classes: Vec<Value> = Vec::new();
        for v in labels {
            if !classes.contains(v) {
                classes.push(v.clone());
            }
        }
        classes.sort_by(|a, b| a.total_cmp(b));
        Self { classes }
    }

    pub fn classes(&self) -> &[Value] {
        &self.classes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn encode(&self, label: &Value) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn decode(&self, index: usize) -> Option<&Value> {
        self.classes.get(index)
    }
}

/// Feature matrix (`rows × features`) plus encoded labels.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    pub feature_names: Vec<String>,
    pub records: Array2<f64>,
    pub targets: Array1<usize>,
    pub labels: LabelEncoder,
}

impl FeatureTable {
    /// Split columns: every column except `label_column` becomes a feature.
    ///
    /// Feature cells must be numeric and label cells must be present;
    /// anything else is [`Error::InvalidFeatureType`].
    pub fn from_dataset(dataset: &Dataset, label_column: &str) -> Result<Self> {
        let label_idx = dataset
            .column_index(label_column)
            .ok_or_else(|| Error::MissingLabelColumn {
                column: label_column.to_string(),
            })?;

        let feature_idx: Vec<usize> = (0..dataset.columns.len())
            .filter(|&i| i != label_idx)
            .collect();
        if feature_idx.is_empty() {
            return Err(Error::NoFeatureColumns);
        }

        let n_rows = dataset.rows.len();
        let mut records = Array2::<f64>::zeros((n_rows, feature_idx.len()));
        for (r, row) in dataset.rows.iter().enumerate() {
            for (j, &c) in feature_idx.iter().enumerate() {
                records[[r, j]] = row[c].as_number().ok_or_else(|| invalid(dataset, c, r))?;
            }
            if row[label_idx].is_missing() {
                return Err(invalid(dataset, label_idx, r));
            }
        }

        let labels = LabelEncoder::fit(dataset.rows.iter().map(|row| &row[label_idx]));
        let targets = dataset
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                labels
                    .encode(&row[label_idx])
                    .ok_or_else(|| invalid(dataset, label_idx, r))
            })
            .collect::<Result<Array1<usize>>>()?;

        tracing::debug!(
            rows = n_rows,
            features = feature_idx.len(),
            classes = labels.n_classes(),
            "separated features from label `{}`",
            label_column
        );

        Ok(Self {
            feature_names: feature_idx
                .iter()
                .map(|&i| dataset.columns[i].clone())
                .collect(),
            records,
            targets,
            labels,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.records.nrows()
    }
}

fn invalid(dataset: &Dataset, col: usize, row: usize) -> Error {
    let value = match &dataset.rows[row][col] {
        Value::Missing => "<missing>".to_string(),
        v => v.to_string(),
    };
    Error::InvalidFeatureType {
        column: dataset.columns[col].clone(),
        row,
        value,
    }
}
