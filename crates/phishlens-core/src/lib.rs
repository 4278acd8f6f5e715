//! PhishLens core: load a labeled phishing dataset, fit a random forest and
//! report how well it separates the classes. A standalone URL feature
//! extractor lives in [`features`].

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod forest;
pub mod logging;
pub mod matrix;
pub mod metrics;
pub mod pipeline;
pub mod split;

pub use dataset::{load, Dataset, Value};
pub use error::{Error, Result, Stage};
pub use features::{extract_features, FeatureVector};
pub use pipeline::{train_and_evaluate, Evaluation};
