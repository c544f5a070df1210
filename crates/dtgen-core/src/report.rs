//! Per-column generalization outcomes.

use serde::Serialize;

use crate::label::TypeLabel;

/// What happened to a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOutcome {
    /// The inferred label is not a key of the type map.
    Unchanged,
    /// The column was cast to a new storage type.
    Converted,
    /// A mapping matched but required no cast (target `object`).
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    pub column: String,
    pub inferred: TypeLabel,
    /// Label after generalization; equals `inferred` unless converted.
    pub label: TypeLabel,
    pub outcome: ColumnOutcome,
}

/// Outcomes for every column, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneralizeReport {
    pub columns: Vec<ColumnReport>,
}

impl GeneralizeReport {
    pub fn converted_count(&self) -> usize {
        self.count(ColumnOutcome::Converted)
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(ColumnOutcome::Unchanged)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|report| report.column == name)
    }

    fn count(&self, outcome: ColumnOutcome) -> usize {
        self.columns
            .iter()
            .filter(|report| report.outcome == outcome)
            .count()
    }
}
