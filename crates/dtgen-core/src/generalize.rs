//! Column type generalization.
//!
//! Each column moves through `classified -> (unchanged | converting ->
//! converted | failed)`. The first failure aborts the whole table.

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::cast::cast_column;
use crate::error::{GeneralizeError, Result};
use crate::inference::infer_label;
use crate::label::TypeLabel;
use crate::observer::ConversionObserver;
use crate::options::GeneralizeOptions;
use crate::report::{ColumnOutcome, ColumnReport, GeneralizeReport};
use crate::type_map::TypeMap;

/// A generalized table together with its per-column report.
#[derive(Debug, Clone)]
pub struct Generalized {
    pub table: DataFrame,
    pub report: GeneralizeReport,
}

/// Generalize every column of `table` according to `type_map`.
///
/// Columns are processed in table order. Columns whose inferred label is
/// not a key of the map are passed through untouched.
///
/// # Errors
///
/// Returns [`GeneralizeError::Conversion`] for the first column that
/// cannot be cast; `observer` is notified before the error is returned.
pub fn generalize<O: ConversionObserver>(
    table: DataFrame,
    type_map: &TypeMap,
    options: &GeneralizeOptions,
    observer: &O,
) -> Result<Generalized> {
    let columns = table.take_columns();
    let mut converted = Vec::with_capacity(columns.len());
    let mut report = GeneralizeReport::default();

    for column in columns {
        let (column, column_report) = generalize_column(column, type_map, options, observer)?;
        converted.push(column);
        report.columns.push(column_report);
    }

    let table = DataFrame::new(converted)?;
    Ok(Generalized { table, report })
}

fn generalize_column<O: ConversionObserver>(
    column: Column,
    type_map: &TypeMap,
    options: &GeneralizeOptions,
    observer: &O,
) -> Result<(Column, ColumnReport)> {
    let name = column.name().to_string();
    let inferred = infer_label(&column);
    debug!(column = %name, label = %inferred, dtype = %column.dtype(), "classified column");

    let Some(target) = type_map.target_for(inferred) else {
        let report = ColumnReport {
            column: name,
            inferred,
            label: inferred,
            outcome: ColumnOutcome::Unchanged,
        };
        return Ok((column, report));
    };

    if target == TypeLabel::Object {
        observer.column_converted(&name, inferred, target);
        let report = ColumnReport {
            column: name,
            inferred,
            label: inferred,
            outcome: ColumnOutcome::NoOp,
        };
        return Ok((column, report));
    }

    match cast_column(&column, target, options.bool_parsing) {
        Ok(cast) => {
            observer.column_converted(&name, inferred, target);
            let report = ColumnReport {
                column: name,
                inferred,
                label: target,
                outcome: ColumnOutcome::Converted,
            };
            Ok((cast, report))
        }
        Err(reason) => {
            let error = GeneralizeError::Conversion {
                column: name.clone(),
                from: inferred,
                to: target,
                reason,
            };
            observer.column_failed(&name, inferred, target, &error);
            Err(error)
        }
    }
}
