//! Table I/O for the column type generalizer.
//!
//! Loads a UTF-8 CSV file (first row = headers) into a Polars DataFrame and
//! writes a DataFrame back out with the same shape, no index column.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dtgen_io::{read_csv_table, write_csv_table};
//!
//! let mut df = read_csv_table(Path::new("input.csv"))?;
//! write_csv_table(&mut df, Path::new("output.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IoError, Result};

// === CSV ===
pub use csv::{
    ensure_input_exists, ensure_parent_dir, read_csv_table, validate_encoding, write_csv_table,
};
