use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// Environment variable that overrides `dataset_path` from the config file.
pub const DATASET_ENV: &str = "PHISHLENS_DATASET";

/// How many features a tree considers at each split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxFeatures {
    /// `ceil(sqrt(n_features))`.
    #[default]
    Sqrt,
    /// `ceil(log2(n_features))`, at least 1.
    Log2,
    /// Every feature (plain bagging).
    All,
    /// A fixed count, capped at the number of features.
    Count(usize),
}

impl MaxFeatures {
    /// Number of features to draw out of `n_features`.
    pub fn resolve(self, n_features: usize) -> usize {
        let k = match self {
            MaxFeatures::Sqrt => (n_features as f64).sqrt().ceil() as usize,
            MaxFeatures::Log2 => (n_features as f64).log2().ceil() as usize,
            MaxFeatures::All => n_features,
            MaxFeatures::Count(n) => n,
        };
        k.clamp(1, n_features.max(1))
    }
}

/// Random-forest parameters (`[train.forest]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees in the ensemble.
    pub n_trees: usize,
    /// Candidate features drawn at each split.
    pub max_features: MaxFeatures,
    /// Optional depth limit per tree (None = grow until pure).
    pub max_depth: Option<usize>,
    /// Seed for bootstrap and per-split feature sampling.
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_features: MaxFeatures::Sqrt,
            max_depth: None,
            seed: 42,
        }
    }
}

/// Split and fit parameters (`[train]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Column holding the class label.
    pub label_column: String,
    /// Fraction of rows held out for evaluation, in (0, 1).
    pub test_size: f64,
    /// Seed for the train/test permutation.
    pub split_seed: u64,
    pub forest: ForestConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            label_column: "Result".to_string(),
            test_size: 0.2,
            split_seed: 42,
            forest: ForestConfig::default(),
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "test_size must be in (0, 1), got {}",
                self.test_size
            )));
        }
        if self.forest.n_trees == 0 {
            return Err(Error::InvalidConfig("n_trees must be at least 1".into()));
        }
        if self.forest.n_trees > usize::from(u16::MAX) {
            return Err(Error::InvalidConfig(format!(
                "n_trees must be at most {}, got {}",
                u16::MAX,
                self.forest.n_trees
            )));
        }
        if self.forest.max_features == MaxFeatures::Count(0) {
            return Err(Error::InvalidConfig(
                "max_features count must be at least 1".into(),
            ));
        }
        if self.forest.max_depth == Some(0) {
            return Err(Error::InvalidConfig("max_depth must be at least 1".into()));
        }
        Ok(())
    }
}

/// Global configuration loaded from `~/.config/phishlens/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// CSV consumed by `load` and `train` when no path is given on the command line.
    pub dataset_path: PathBuf,
    pub train: TrainConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/phishing_dataset.csv"),
            train: TrainConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Pick the dataset path: explicit argument, then `PHISHLENS_DATASET`, then config.
    pub fn resolve_dataset_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        self.resolve_dataset_path_with(explicit, std::env::var_os(DATASET_ENV))
    }

    fn resolve_dataset_path_with(
        &self,
        explicit: Option<PathBuf>,
        env: Option<OsString>,
    ) -> PathBuf {
        explicit
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| self.dataset_path.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishlens")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PipelineConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PipelineConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PipelineConfig = toml::from_str(&data)?;
    Ok(cfg)
}
