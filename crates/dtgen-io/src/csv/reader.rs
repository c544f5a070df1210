//! CSV loading into a Polars DataFrame.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use polars::prelude::{
    Column, CsvReadOptions, DataFrame, DataType, IntoColumn, NamedFrom, PolarsResult, SerReader,
    Series,
};
use tracing::{debug, warn};

use crate::error::{IoError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Fail with [`IoError::FileNotFound`] unless `path` exists.
pub fn ensure_input_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(bytes: &[u8], path: &Path) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IoError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Reads a whole CSV file (first row = headers) into a DataFrame.
///
/// The schema is inferred from every row, not a prefix. A UTF-8 BOM is
/// skipped.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    ensure_input_exists(path)?;
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    validate_encoding(&bytes, path)?;

    let body = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_vec(),
        None => bytes,
    };

    let df = match load_inferred(&body) {
        Ok(df) => df,
        Err(error) => {
            // A cell can defeat the inferred dtype (e.g. an integer wider
            // than i64). Reload as text and re-type column by column.
            warn!(path = %path.display(), %error, "schema inference failed, re-typing per column");
            load_as_text(body)
                .and_then(retype_columns)
                .map_err(|_| IoError::CsvParse {
                    path: path.to_path_buf(),
                    message: error.to_string(),
                })?
        }
    };

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}

fn load_inferred(body: &[u8]) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(body.to_vec()))
        .finish()
}

fn load_as_text(body: Vec<u8>) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(body))
        .finish()
}

fn retype_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    let columns = df
        .take_columns()
        .into_iter()
        .map(retype_text_column)
        .collect::<PolarsResult<Vec<_>>>()?;
    DataFrame::new(columns)
}

/// Narrowest of Int64, Float64, Boolean that holds every cell; text otherwise.
///
/// Integer-looking text that overflows Int64 stays text rather than
/// silently losing precision as a float.
fn retype_text_column(column: Column) -> PolarsResult<Column> {
    let text = column.str()?;
    let cells: Vec<&str> = text.iter().flatten().collect();
    if cells.is_empty() {
        return Ok(column);
    }
    if let Ok(ints) = column.strict_cast(&DataType::Int64) {
        return Ok(ints);
    }
    if cells.iter().all(|cell| looks_like_integer(cell)) {
        return Ok(column);
    }
    if let Ok(floats) = column.strict_cast(&DataType::Float64) {
        return Ok(floats);
    }
    if cells
        .iter()
        .all(|cell| cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false"))
    {
        let flags: Vec<Option<bool>> = text
            .iter()
            .map(|cell| cell.map(|c| c.eq_ignore_ascii_case("true")))
            .collect();
        return Ok(Series::new(column.name().clone(), flags).into_column());
    }
    Ok(column)
}

fn looks_like_integer(cell: &str) -> bool {
    let digits = cell.strip_prefix(['-', '+']).unwrap_or(cell);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn read_error(path: &Path, e: std::io::Error) -> IoError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IoError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IoError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}
