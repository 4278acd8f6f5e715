//! Synthetic phishing-style CSV fixtures written to a temp dir.
//!
//! Columns follow the UCI phishing dataset convention: features coded as
//! -1/0/1 and a `Result` label of -1 (phishing) or 1 (legitimate).

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Ten rows, three numeric features, binary `Result`.
pub const TEN_ROWS: &str = "\
having_IP_Address,URL_Length,SSLfinal_State,Result
1,1,1,1
1,0,1,1
1,1,0,1
0,1,1,1
1,1,1,1
-1,-1,-1,-1
-1,0,-1,-1
-1,-1,0,-1
0,-1,-1,-1
-1,-1,-1,-1
";

/// A temp dir holding one CSV file; the file lives as long as the fixture.
pub struct CsvFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write(contents: &str) -> CsvFixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phishing_dataset.csv");
    fs::write(&path, contents).unwrap();
    CsvFixture { _dir: dir, path }
}

/// `rows` rows where the label is decided by the sign of the first feature.
pub fn separable(rows: usize) -> String {
    let mut out = String::from("f0,f1,f2,f3,Result\n");
    for i in 0..rows {
        let label = if i % 2 == 0 { 1 } else { -1 };
        let noise = (i * 7 % 5) as i64 - 2;
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            label * 3,
            noise,
            (i % 3) as i64 - 1,
            noise * label,
            label
        ));
    }
    out
}

/// Every feature vector appears once as phishing and once as legitimate, so
/// no split can separate them and trees end with tied leaves.
pub fn contradictory(vectors: usize) -> String {
    let mut out = String::from("having_IP_Address,URL_Length,SSLfinal_State,Result\n");
    for i in 0..vectors {
        let row = format!("{},{},{}", (i % 3) as i64 - 1, (i % 2) as i64, (i / 3 % 3) as i64 - 1);
        out.push_str(&format!("{row},1\n{row},-1\n"));
    }
    out
}
