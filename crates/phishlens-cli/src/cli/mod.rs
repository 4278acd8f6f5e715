//! CLI for the PhishLens phishing-URL classifier.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use phishlens_core::config::{self, PipelineConfig};
use std::path::PathBuf;

use commands::{run_completions, run_features, run_load, run_train};

/// Top-level CLI for PhishLens.
#[derive(Debug, Parser)]
#[command(name = "phishlens")]
#[command(about = "PhishLens: train and evaluate a phishing-URL classifier", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Dataset selection shared by `load` and `train`.
#[derive(Debug, Args)]
pub struct DatasetArgs {
    /// CSV file to read (overrides PHISHLENS_DATASET and the config file).
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load the dataset and print its shape.
    Load {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Split, fit a random forest and print accuracy plus a per-class report.
    Train {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Seed for both the train/test split and the forest.
        #[arg(long, value_name = "N")]
        seed: Option<u64>,
        /// Fraction of rows held out for evaluation, in (0, 1).
        #[arg(long, value_name = "F")]
        test_size: Option<f64>,
        /// Number of trees in the forest.
        #[arg(long, value_name = "N")]
        trees: Option<usize>,
    },

    /// Print the lexical features of one or more URLs as JSON.
    Features {
        /// URLs to featurize.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Generate a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Apply `train` flag overrides on top of the loaded config.
pub(crate) fn apply_train_overrides(
    cfg: &mut PipelineConfig,
    seed: Option<u64>,
    test_size: Option<f64>,
    trees: Option<usize>,
) {
    if let Some(seed) = seed {
        cfg.train.split_seed = seed;
        cfg.train.forest.seed = seed;
    }
    if let Some(test_size) = test_size {
        cfg.train.test_size = test_size;
    }
    if let Some(trees) = trees {
        cfg.train.forest.n_trees = trees;
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Load { dataset } => {
                let cfg = load_config()?;
                run_load(&cfg.resolve_dataset_path(dataset.dataset))?;
            }
            CliCommand::Train {
                dataset,
                seed,
                test_size,
                trees,
            } => {
                let mut cfg = load_config()?;
                apply_train_overrides(&mut cfg, seed, test_size, trees);
                let path = cfg.resolve_dataset_path(dataset.dataset);
                run_train(&path, &cfg.train)?;
            }
            CliCommand::Features { urls } => run_features(&urls)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

fn load_config() -> Result<PipelineConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
