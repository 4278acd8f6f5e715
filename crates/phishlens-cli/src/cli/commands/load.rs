//! `phishlens load` – read the dataset and report its shape.

use anyhow::Result;
use phishlens_core::{dataset, Dataset};
use std::path::Path;

/// Load `path`, print `Loaded dataset shape: (rows, cols)` and hand the dataset back.
pub fn run_load(path: &Path) -> Result<Dataset> {
    let ds = dataset::load(path)?;
    let (rows, cols) = ds.shape();
    println!("Loaded dataset shape: ({rows}, {cols})");
    Ok(ds)
}
