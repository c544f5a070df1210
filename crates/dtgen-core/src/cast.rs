//! Casting a column to a target type label.

use polars::prelude::{AnyValue, Column, DataType, IntoColumn, NamedFrom, Series};

use crate::inference::label_for_dtype;
use crate::label::TypeLabel;
use crate::options::BoolParsing;

/// Cast `column` to the storage dtype of `target`.
///
/// Returns the reason as text on failure; the caller attaches the column
/// name and labels.
pub fn cast_column(
    column: &Column,
    target: TypeLabel,
    bool_parsing: BoolParsing,
) -> Result<Column, String> {
    match target {
        TypeLabel::Float => column
            .strict_cast(&DataType::Float64)
            .map_err(|e| e.to_string()),
        TypeLabel::Str => Ok(to_text(column)),
        // Float -> Int64 truncates toward zero.
        TypeLabel::Int => column
            .strict_cast(&DataType::Int64)
            .map_err(|e| e.to_string()),
        TypeLabel::Bool => coerce_bool(column, bool_parsing),
        TypeLabel::Object => Ok(column.clone()),
    }
}

fn coerce_bool(column: &Column, parsing: BoolParsing) -> Result<Column, String> {
    let values: Vec<Option<bool>> = match label_for_dtype(column.dtype()) {
        TypeLabel::Bool => return Ok(column.clone()),
        TypeLabel::Int | TypeLabel::Float => {
            let floats = column
                .cast(&DataType::Float64)
                .map_err(|e| e.to_string())?;
            floats
                .f64()
                .map_err(|e| e.to_string())?
                .iter()
                .map(|value| value.map(|v| v != 0.0))
                .collect()
        }
        TypeLabel::Str | TypeLabel::Object => {
            let text = to_text(column);
            text.str()
                .map_err(|e| e.to_string())?
                .iter()
                .map(|value| value.map(|s| text_to_bool(s, parsing)).transpose())
                .collect::<Result<_, _>>()?
        }
    };
    Ok(Series::new(column.name().clone(), values).into_column())
}

/// Render every cell of `column` as text.
///
/// Dtypes polars cannot cast to `String` (e.g. binary holding invalid
/// UTF-8) are rendered cell by cell; bytes are decoded lossily.
fn to_text(column: &Column) -> Column {
    if let Ok(text) = column.cast(&DataType::String) {
        return text;
    }
    let values: Vec<Option<String>> = (0..column.len())
        .map(|idx| any_to_text(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect();
    Series::new(column.name().clone(), values).into_column()
}

fn any_to_text(value: AnyValue) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Binary(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        AnyValue::BinaryOwned(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        other => Some(other.to_string()),
    }
}

/// Coerce one text cell to a boolean.
pub fn text_to_bool(value: &str, parsing: BoolParsing) -> Result<bool, String> {
    match parsing {
        BoolParsing::Truthy => Ok(!value.is_empty()),
        BoolParsing::Literal => {
            let trimmed = value.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(format!(
                    "'{value}' is not a boolean literal (expected true or false)"
                ))
            }
        }
    }
}
