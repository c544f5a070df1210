//! CSV serialization of a DataFrame.

use std::fs::{self, File};
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, warn};

use crate::error::{IoError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| IoError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Writes `df` as comma-separated UTF-8 with a header row and no index.
///
/// A partially written file is removed if serialization fails.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|e| IoError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let written = CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df);

    if let Err(e) = written {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "could not remove partial output");
        }
        return Err(IoError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        });
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_write_csv_table_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), vec![1i64, 3]).into_column(),
            Series::new("b".into(), vec!["x", "y"]).into_column(),
        ])
        .unwrap();

        write_csv_table(&mut df, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,b\n1,x\n3,y\n");
    }

    #[test]
    fn test_write_csv_table_keeps_nulls_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), vec![Some(1i64), None]).into_column(),
        ])
        .unwrap();

        write_csv_table(&mut df, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n1\n\n");
    }
}
