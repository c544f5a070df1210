//! Column type-label inference from polars storage dtypes.
//!
//! Priority order (highest to lowest):
//! 1. Untyped text storage (`String`, all-null) -> `str`
//! 2. Integer dtypes -> `int`
//! 3. Floating dtypes -> `float`
//! 4. Boolean -> `bool`
//! 5. Anything else -> `object`

use polars::prelude::{Column, DataType};

use crate::label::TypeLabel;

/// Infer the type label of a column.
pub fn infer_label(column: &Column) -> TypeLabel {
    label_for_dtype(column.dtype())
}

/// Map a storage dtype onto the label vocabulary.
pub fn label_for_dtype(dtype: &DataType) -> TypeLabel {
    match dtype {
        // Every value of an untyped column renders as text.
        DataType::String | DataType::Null => TypeLabel::Str,
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => TypeLabel::Int,
        DataType::Float32 | DataType::Float64 => TypeLabel::Float,
        DataType::Boolean => TypeLabel::Bool,
        _ => TypeLabel::Object,
    }
}
