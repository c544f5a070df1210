//! CSV reading and writing.

mod reader;
mod writer;

pub use reader::{ensure_input_exists, read_csv_table, validate_encoding};
pub use writer::{ensure_parent_dir, write_csv_table};
