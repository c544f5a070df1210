//! Per-column run summaries (table for humans, JSON for scripts).

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use dtgen_core::{ColumnOutcome, ColumnReport};

use crate::pipeline::RunOutcome;

pub fn print_summary_table(outcome: &RunOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    println!("Rows: {}", outcome.rows);
    println!("{}", summary_table(outcome));
}

pub fn print_summary_json(outcome: &RunOutcome) -> serde_json::Result<()> {
    println!("{}", summary_json(outcome)?);
    Ok(())
}

/// Build the per-column summary table.
pub fn summary_table(outcome: &RunOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Inferred"),
        header_cell("Type"),
        header_cell("Outcome"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Center);
    }
    for report in &outcome.report.columns {
        table.add_row(vec![
            Cell::new(&report.column),
            Cell::new(report.inferred),
            Cell::new(report.label),
            outcome_cell(report.outcome),
        ]);
    }
    table
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    input: &'a Path,
    output: Option<&'a Path>,
    rows: usize,
    converted: usize,
    columns: &'a [ColumnReport],
}

/// Render the summary as pretty-printed JSON.
pub fn summary_json(outcome: &RunOutcome) -> serde_json::Result<String> {
    let summary = JsonSummary {
        input: &outcome.input,
        output: outcome.output.as_deref(),
        rows: outcome.rows,
        converted: outcome.report.converted_count(),
        columns: &outcome.report.columns,
    };
    serde_json::to_string_pretty(&summary)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn outcome_cell(outcome: ColumnOutcome) -> Cell {
    match outcome {
        ColumnOutcome::Converted => Cell::new("converted").fg(Color::Green),
        ColumnOutcome::NoOp => Cell::new("no-op").fg(Color::Yellow),
        ColumnOutcome::Unchanged => Cell::new("unchanged").add_attribute(Attribute::Dim),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use dtgen_core::{GeneralizeReport, TypeLabel};

    fn outcome() -> RunOutcome {
        RunOutcome {
            input: PathBuf::from("in.csv"),
            output: None,
            rows: 2,
            report: GeneralizeReport {
                columns: vec![
                    ColumnReport {
                        column: "a".to_string(),
                        inferred: TypeLabel::Int,
                        label: TypeLabel::Float,
                        outcome: ColumnOutcome::Converted,
                    },
                    ColumnReport {
                        column: "b".to_string(),
                        inferred: TypeLabel::Float,
                        label: TypeLabel::Float,
                        outcome: ColumnOutcome::Unchanged,
                    },
                ],
            },
        }
    }

    #[test]
    fn test_summary_table_lists_every_column() {
        let rendered = summary_table(&outcome()).to_string();
        assert!(rendered.contains("Column"));
        assert!(rendered.contains("converted"));
        assert!(rendered.contains("unchanged"));
        assert!(rendered.contains("float"));
    }

    #[test]
    fn test_summary_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&summary_json(&outcome()).unwrap()).unwrap();
        assert_eq!(json["input"], "in.csv");
        assert!(json["output"].is_null());
        assert_eq!(json["rows"], 2);
        assert_eq!(json["converted"], 1);
        assert_eq!(json["columns"][0]["column"], "a");
        assert_eq!(json["columns"][0]["inferred"], "int");
        assert_eq!(json["columns"][0]["label"], "float");
        assert_eq!(json["columns"][0]["outcome"], "converted");
        assert_eq!(json["columns"][1]["outcome"], "unchanged");
    }
}
