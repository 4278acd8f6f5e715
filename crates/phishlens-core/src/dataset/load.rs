//! CSV ingestion.

use std::fs::File;
use std::io;
use std::path::Path;

use super::{Dataset, Value};
use crate::error::{Error, Result};

/// Read a headed CSV file fully into memory.
///
/// Header names are kept exactly as written; cells are trimmed by
/// [`Value::parse`].
///
/// Every data row must have as many fields as the header; the reader is not
/// flexible, so ragged rows surface as [`Error::Parse`].
pub fn load(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::DatasetNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let dataset = read_csv(file).map_err(|source| classify_csv_error(path, source))?;
    if dataset.columns.is_empty() {
        return Err(Error::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    let (rows, cols) = dataset.shape();
    tracing::info!(path = %path.display(), rows, cols, "loaded dataset");
    if dataset.is_empty() {
        tracing::warn!(path = %path.display(), "dataset has a header but no rows");
    }
    Ok(dataset)
}

/// Parse CSV text from any reader. Used by [`load`] and handy for in-memory data.
pub fn read_csv<R: io::Read>(reader: R) -> std::result::Result<Dataset, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(Value::parse).collect());
    }

    Ok(Dataset { columns, rows })
}

fn classify_csv_error(path: &Path, source: csv::Error) -> Error {
    let path = path.to_path_buf();
    if !source.is_io_error() {
        return Error::Parse { path, source };
    }
    match source.into_kind() {
        csv::ErrorKind::Io(source) => Error::Io { path, source },
        other => Error::Io {
            path,
            source: io::Error::new(io::ErrorKind::Other, format!("{other:?}")),
        },
    }
}
