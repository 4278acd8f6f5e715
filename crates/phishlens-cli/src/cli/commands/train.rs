//! `phishlens train` – full load → split → fit → evaluate run.

use anyhow::Result;
use phishlens_core::config::TrainConfig;
use phishlens_core::train_and_evaluate;
use std::path::Path;

use super::run_load;

pub fn run_train(path: &Path, cfg: &TrainConfig) -> Result<()> {
    let dataset = run_load(path)?;
    let eval = train_and_evaluate(&dataset, cfg)?;

    println!("Accuracy: {}", eval.accuracy);
    println!();
    println!("Classification Report:");
    println!();
    print!("{}", eval.report);
    Ok(())
}
