//! Pipeline error type.
//!
//! Every failure is deterministic and input-dependent, so nothing here is
//! retried. Each variant belongs to exactly one pipeline [`Stage`], which is
//! included in the rendered message.

use std::fmt;
use std::path::PathBuf;

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Split,
    Fit,
    Evaluate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Split => "split",
            Stage::Fit => "fit",
            Stage::Evaluate => "evaluate",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dataset path does not exist.
    #[error("[load] dataset not found: {}", path.display())]
    DatasetNotFound { path: PathBuf },

    /// Dataset path exists but could not be opened or read.
    #[error("[load] cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid delimited text (ragged rows, invalid UTF-8).
    #[error("[load] malformed CSV in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File holds no header row at all.
    #[error("[load] {} is empty", path.display())]
    EmptyDataset { path: PathBuf },

    #[error("[split] dataset has no label column `{column}`")]
    MissingLabelColumn { column: String },

    #[error("[split] dataset has no feature columns besides the label")]
    NoFeatureColumns,

    /// A feature (or label) cell the classifier cannot consume. `row` is the
    /// zero-based data row, not counting the header.
    #[error("[split] column `{column}` row {row}: expected a number, found {value:?}")]
    InvalidFeatureType {
        column: String,
        row: usize,
        value: String,
    },

    #[error("[split] need at least {required} rows to split, dataset has {rows}")]
    InsufficientData { rows: usize, required: usize },

    #[error("[split] invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("[fit] {0}")]
    Fit(String),

    #[error("[evaluate] {0}")]
    Evaluate(String),
}

impl Error {
    /// Stage of the pipeline this error aborted.
    pub fn stage(&self) -> Stage {
        match self {
            Error::DatasetNotFound { .. }
            | Error::Io { .. }
            | Error::Parse { .. }
            | Error::EmptyDataset { .. } => Stage::Load,
            Error::MissingLabelColumn { .. }
            | Error::NoFeatureColumns
            | Error::InvalidFeatureType { .. }
            | Error::InsufficientData { .. }
            | Error::InvalidConfig(_) => Stage::Split,
            Error::Fit(_) => Stage::Fit,
            Error::Evaluate(_) => Stage::Evaluate,
        }
    }
}
