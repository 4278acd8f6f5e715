//! `phishlens features <url>...` – print lexical URL features.

use anyhow::Result;
use phishlens_core::extract_features;

/// One JSON object per URL, in argument order.
pub fn run_features(urls: &[String]) -> Result<()> {
    for url in urls {
        let json = serde_json::to_string(&extract_features(url))?;
        println!("{json}");
    }
    Ok(())
}
