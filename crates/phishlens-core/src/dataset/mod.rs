//! Labeled tabular dataset loaded from CSV.
//!
//! A [`Dataset`] is built once by [`load`] and never mutated afterwards. Cells
//! keep their inferred [`Value`] kind so that type problems are reported by
//! the training stage that actually needs numbers.

mod load;
mod value;

pub use load::{load, read_csv};
pub use value::Value;

/// Rows × named columns. Every row has one value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_reports_shape() {
        let f = write_csv("having_IP_Address,URL_Length,Result\n1,-1,-1\n-1,1,1\n1,0,1\n");
        let ds = load(f.path()).unwrap();
        assert_eq!(ds.shape(), (3, 3));
        assert_eq!(ds.columns(), &["having_IP_Address", "URL_Length", "Result"]);
        assert_eq!(ds.rows()[0][1], Value::Number(-1.0));
    }

    #[test]
    fn load_header_only() {
        let f = write_csv("a,b,Result\n");
        let ds = load(f.path()).unwrap();
        assert_eq!(ds.shape(), (0, 3));
        assert!(ds.is_empty());
    }

    #[test]
    fn load_keeps_text_and_missing_cells() {
        let f = write_csv("a,b,Result\nx,,1\n");
        let ds = load(f.path()).unwrap();
        assert_eq!(ds.rows()[0][0], Value::Text("x".into()));
        assert!(ds.rows()[0][1].is_missing());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { .. }));
    }

    #[test]
    fn load_ragged_rows_is_parse_error() {
        let f = write_csv("a,b,Result\n1,2,1\n1,2\n");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn load_invalid_utf8_is_parse_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"a,Result\n\xff\xfe,1\n").unwrap();
        f.flush().unwrap();
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn load_empty_file() {
        let f = write_csv("");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset { .. }));
    }

    #[test]
    fn column_lookup() {
        let ds = read_csv("a,Result\n1,-1\n2,1\n".as_bytes()).unwrap();
        assert_eq!(ds.column_index("Result"), Some(1));
        assert_eq!(ds.column_index("missing"), None);
    }

    #[test]
    fn header_names_are_kept_verbatim() {
        let ds = read_csv("a, Result\n1,-1\n".as_bytes()).unwrap();
        assert_eq!(ds.columns(), &["a", " Result"]);
        assert_eq!(ds.column_index("Result"), None);
        assert_eq!(ds.column_index(" Result"), Some(1));
    }
}
