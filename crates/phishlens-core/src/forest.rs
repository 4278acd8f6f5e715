//! Random-forest classifier backed by `smartcore`.
//!
//! Trees are CART (Gini) grown on a class-stratified bootstrap sample, with
//! `max_features` candidate columns drawn at every split. Leaf labels and the
//! forest vote both take the first maximum, so ties go to the lowest class
//! index. A fitted forest depends only on its config and training data.

use ndarray::{Array1, Array2};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::tree::decision_tree_classifier::SplitCriterion;

use crate::config::ForestConfig;
use crate::error::{Error, Result};

type Ensemble = RandomForestClassifier<f64, usize, Array2<f64>, Array1<usize>>;

enum Model {
    Ensemble(Ensemble),
    /// Every training row had this class.
    Constant(usize),
}

/// A fitted forest. Lives for one pipeline run; there is no persistence.
pub struct RandomForest {
    model: Model,
    n_features: usize,
}

impl RandomForest {
    /// Fit `cfg.n_trees` trees. `targets` are dense class indices below `n_classes`.
    pub fn fit(
        records: &Array2<f64>,
        targets: &Array1<usize>,
        n_classes: usize,
        cfg: &ForestConfig,
    ) -> Result<Self> {
        let n_rows = records.nrows();
        let n_features = records.ncols();
        if n_rows == 0 || n_features == 0 {
            return Err(Error::Fit(format!(
                "cannot fit on an empty training set ({n_rows} rows, {n_features} features)"
            )));
        }
        if targets.len() != n_rows {
            return Err(Error::Fit(format!(
                "{} targets for {} rows",
                targets.len(),
                n_rows
            )));
        }
        if let Some(&bad) = targets.iter().find(|&&t| t >= n_classes) {
            return Err(Error::Fit(format!(
                "class index {bad} out of range for {n_classes} classes"
            )));
        }
        if cfg.n_trees == 0 {
            return Err(Error::Fit("forest needs at least one tree".into()));
        }
        let n_trees = u16::try_from(cfg.n_trees).map_err(|_| {
            Error::Fit(format!(
                "at most {} trees are supported, got {}",
                u16::MAX,
                cfg.n_trees
            ))
        })?;

        let first = targets[0];
        if targets.iter().all(|&t| t == first) {
            tracing::debug!(class = first, rows = n_rows, "single-class training set");
            return Ok(Self {
                model: Model::Constant(first),
                n_features,
            });
        }

        let k = cfg.max_features.resolve(n_features);
        // smartcore stops at `n <= min_samples_split`; 1 lets any two rows split.
        let mut params = RandomForestClassifierParameters::default()
            .with_criterion(SplitCriterion::Gini)
            .with_n_trees(n_trees)
            .with_m(k)
            .with_min_samples_leaf(1)
            .with_min_samples_split(1)
            .with_seed(cfg.seed);
        if let Some(depth) = cfg.max_depth {
            params = params.with_max_depth(u16::try_from(depth).unwrap_or(u16::MAX));
        }

        let ensemble = Ensemble::fit(records, targets, params)
            .map_err(|e| Error::Fit(format!("random forest: {e}")))?;

        tracing::debug!(
            trees = n_trees,
            features_per_split = k,
            rows = n_rows,
            "fitted random forest"
        );

        Ok(Self {
            model: Model::Ensemble(ensemble),
            n_features,
        })
    }

    /// Majority-vote class index per row.
    pub fn predict(&self, records: &Array2<f64>) -> Result<Array1<usize>> {
        if records.ncols() != self.n_features {
            return Err(Error::Evaluate(format!(
                "model was fitted on {} features, got {}",
                self.n_features,
                records.ncols()
            )));
        }
        match &self.model {
            Model::Ensemble(ensemble) => ensemble
                .predict(records)
                .map_err(|e| Error::Evaluate(format!("random forest: {e}"))),
            Model::Constant(class) => Ok(Array1::from_elem(records.nrows(), *class)),
        }
    }
}
