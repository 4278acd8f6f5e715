//! Accuracy and per-class precision/recall/F1.

use std::fmt;

use crate::error::{Error, Result};
use crate::matrix::LabelEncoder;

/// Fraction of positions where prediction equals truth.
pub fn accuracy(y_true: &[usize], y_pred: &[usize]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let hits = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    Ok(hits as f64 / y_true.len() as f64)
}

fn check_lengths(y_true: &[usize], y_pred: &[usize]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::Evaluate(format!(
            "{} true labels but {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(Error::Evaluate("no test rows to evaluate".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    /// Label as it appeared in the dataset.
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Rows of this class in the test set.
    pub support: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    /// One entry per class seen in truth or predictions, in class order.
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: Averages,
    /// Averages weighted by support.
    pub weighted_avg: Averages,
    pub support: usize,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl ClassificationReport {
    pub fn compute(y_true: &[usize], y_pred: &[usize], labels: &LabelEncoder) -> Result<Self> {
        check_lengths(y_true, y_pred)?;

        let n_classes = y_true
            .iter()
            .chain(y_pred)
            .max()
            .map_or(0, |&m| m + 1)
            .max(labels.n_classes());
        let mut tp = vec![0usize; n_classes];
        let mut predicted = vec![0usize; n_classes];
        let mut actual = vec![0usize; n_classes];
        for (&t, &p) in y_true.iter().zip(y_pred) {
            actual[t] += 1;
            predicted[p] += 1;
            if t == p {
                tp[t] += 1;
            }
        }

        let classes: Vec<ClassMetrics> = (0..n_classes)
            .filter(|&c| actual[c] > 0 || predicted[c] > 0)
            .map(|c| {
                let precision = ratio(tp[c], predicted[c]);
                let recall = ratio(tp[c], actual[c]);
                let f1 = if precision + recall == 0.0 {
                    0.0
                } else {
                    2.0 * precision * recall / (precision + recall)
                };
                ClassMetrics {
                    label: labels
                        .decode(c)
                        .map_or_else(|| c.to_string(), |v| v.to_string()),
                    precision,
                    recall,
                    f1,
                    support: actual[c],
                }
            })
            .collect();

        let support = y_true.len();
        let k = classes.len() as f64;
        let macro_avg = Averages {
            precision: classes.iter().map(|m| m.precision).sum::<f64>() / k,
            recall: classes.iter().map(|m| m.recall).sum::<f64>() / k,
            f1: classes.iter().map(|m| m.f1).sum::<f64>() / k,
        };
        let weighted = |f: fn(&ClassMetrics) -> f64| {
            classes.iter().map(|m| f(m) * m.support as f64).sum::<f64>() / support as f64
        };
        let weighted_avg = Averages {
            precision: weighted(|m| m.precision),
            recall: weighted(|m| m.recall),
            f1: weighted(|m| m.f1),
        };

        Ok(Self {
            accuracy: accuracy(y_true, y_pred)?,
            classes,
            macro_avg,
            weighted_avg,
            support,
        })
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.label.chars().count())
            .chain(std::iter::once("weighted avg".len()))
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.label, c.precision, c.recall, c.f1, c.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.support
        )?;
        for (name, avg) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, avg.precision, avg.recall, avg.f1, self.support
            )?;
        }
        Ok(())
    }
}
