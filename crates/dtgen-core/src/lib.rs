//! Column data-type generalization.
//!
//! This crate provides:
//! - **Type labels**: the closed `{int, float, str, bool, object}` vocabulary
//! - **Type-map parsing**: `old:new[,old:new...]` conversion tables
//! - **Generalization**: per-column label inference and checked casts over
//!   a Polars `DataFrame`
//!
//! # Example
//!
//! ```ignore
//! use dtgen_core::{GeneralizeOptions, TracingObserver, TypeMap, generalize};
//!
//! let type_map = TypeMap::parse("int:float,bool:str")?;
//! let result = generalize(df, &type_map, &GeneralizeOptions::default(), &TracingObserver)?;
//! println!("{} columns converted", result.report.converted_count());
//! ```

mod cast;
mod error;
mod generalize;
mod inference;
mod label;
mod observer;
mod options;
mod report;
mod type_map;

// === Error Types ===
pub use error::{GeneralizeError, MappingSide, Result, TypeMapError};

// === Vocabulary ===
pub use label::{TypeLabel, UnknownLabel};

// === Type Map ===
pub use type_map::TypeMap;

// === Generalization ===
pub use cast::{cast_column, text_to_bool};
pub use generalize::{Generalized, generalize};
pub use inference::{infer_label, label_for_dtype};
pub use observer::{ConversionObserver, NoopObserver, TracingObserver};
pub use options::{BoolParsing, GeneralizeOptions};
pub use report::{ColumnOutcome, ColumnReport, GeneralizeReport};
