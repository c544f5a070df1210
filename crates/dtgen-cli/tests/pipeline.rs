//! End-to-end tests for a generalization run.

use std::fs;
use std::path::Path;

use dtgen_cli::pipeline::{FailureKind, RunConfig, exit_code, failure_kind, run};
use dtgen_core::{BoolParsing, ColumnOutcome, GeneralizeOptions, TypeLabel};

fn write_input(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("input.csv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_int_to_float_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a,b\n1,2.5\n3,4.5\n");
    let output = dir.path().join("output.csv");

    let outcome = run(&RunConfig::new(&input, &output, "int:float")).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a,b\n1.0,2.5\n3.0,4.5\n");
    assert_eq!(outcome.rows, 2);
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));
    let a = outcome.report.column("a").unwrap();
    assert_eq!((a.inferred, a.label), (TypeLabel::Int, TypeLabel::Float));
    assert_eq!(
        outcome.report.column("b").unwrap().outcome,
        ColumnOutcome::Unchanged
    );
}

#[test]
fn test_str_to_object_scenario_leaves_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a\nfoo\nbar\n");
    let output = dir.path().join("output.csv");

    run(&RunConfig::new(&input, &output, "str:object")).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\nfoo\nbar\n");
}

#[test]
fn test_object_object_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let content = "id,name,score\n1,ann,0.5\n2,bob,1.25\n";
    let input = write_input(dir.path(), content);
    let output = dir.path().join("output.csv");

    run(&RunConfig::new(&input, &output, "object:object")).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), content);
}

#[test]
fn test_int_to_str_and_bool() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "n\n1\n2\n0\n");

    let as_str = dir.path().join("str.csv");
    run(&RunConfig::new(&input, &as_str, "int:str")).unwrap();
    assert_eq!(fs::read_to_string(&as_str).unwrap(), "n\n1\n2\n0\n");

    let as_bool = dir.path().join("bool.csv");
    run(&RunConfig::new(&input, &as_bool, "int:bool")).unwrap();
    assert_eq!(fs::read_to_string(&as_bool).unwrap(), "n\ntrue\ntrue\nfalse\n");
}

#[test]
fn test_malformed_map_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a\n1\n");
    let output = dir.path().join("output.csv");

    let result = run(&RunConfig::new(&input, &output, "int-float"));

    assert_eq!(exit_code(&result), 1);
    assert_eq!(failure_kind(&result.unwrap_err()), FailureKind::TypeMap);
    assert!(!output.exists());
}

#[test]
fn test_invalid_type_label_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a\n1\n");
    let output = dir.path().join("output.csv");

    let error = run(&RunConfig::new(&input, &output, "int:decimal")).unwrap_err();

    assert_eq!(failure_kind(&error), FailureKind::TypeMap);
    assert!(error.to_string().contains("'decimal'"));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_reported_before_type_map() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("output.csv");

    // The type map is also malformed; the missing input wins.
    let result = run(&RunConfig::new(&input, &output, "int-float"));

    assert_eq!(exit_code(&result), 1);
    assert_eq!(
        failure_kind(&result.unwrap_err()),
        FailureKind::InputNotFound
    );
    assert!(!output.exists());
}

#[test]
fn test_conversion_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a,b\n1,x\n2,y\n");
    let output = dir.path().join("output.csv");

    let error = run(&RunConfig::new(&input, &output, "str:float")).unwrap_err();

    assert_eq!(failure_kind(&error), FailureKind::Conversion);
    assert!(error.to_string().contains("column 'b'"));
    assert!(!output.exists());
}

#[test]
fn test_strict_type_map_rejects_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a\n1\n");
    let output = dir.path().join("output.csv");

    let lenient = run(&RunConfig::new(&input, &output, "int:str,int:float")).unwrap();
    assert_eq!(lenient.report.column("a").unwrap().label, TypeLabel::Float);

    let strict = run(&RunConfig::new(&input, &output, "int:str,int:float").with_strict_type_map(true));
    assert_eq!(failure_kind(&strict.unwrap_err()), FailureKind::TypeMap);
}

#[test]
fn test_literal_bool_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "flag\nyes\nno\n");
    let output = dir.path().join("output.csv");

    let truthy = run(&RunConfig::new(&input, &output, "str:bool")).unwrap();
    assert_eq!(truthy.report.converted_count(), 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "flag\ntrue\ntrue\n");

    let literal = RunConfig::new(&input, &output, "str:bool")
        .with_options(GeneralizeOptions::default().with_bool_parsing(BoolParsing::Literal));
    let error = run(&literal).unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::Conversion);
}

#[test]
fn test_dry_run_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a\n1\n");
    let output = dir.path().join("output.csv");

    let outcome = run(&RunConfig::new(&input, &output, "int:float").with_dry_run(true)).unwrap();

    assert!(outcome.output.is_none());
    assert_eq!(outcome.report.converted_count(), 1);
    assert!(!output.exists());
}

#[test]
fn test_unparseable_csv_is_unexpected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(&input, [0xFF, 0xFE, b'a', 0x00]).unwrap();
    let output = dir.path().join("output.csv");

    let error = run(&RunConfig::new(&input, &output, "int:float")).unwrap_err();

    assert_eq!(failure_kind(&error), FailureKind::Unexpected);
    assert!(!output.exists());
}

#[test]
fn test_integer_wider_than_i64_passes_through_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a,b\n9999999999999999999999,1\n7,2\n");
    let output = dir.path().join("output.csv");

    let outcome = run(&RunConfig::new(&input, &output, "int:float")).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "a,b\n9999999999999999999999,1.0\n7,2.0\n"
    );
    let a = outcome.report.column("a").unwrap();
    assert_eq!((a.inferred, a.outcome), (TypeLabel::Str, ColumnOutcome::Unchanged));
}

#[test]
fn test_round_trip_normalizes_bool_case() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a\nTrue\nFalse\n");
    let output = dir.path().join("output.csv");

    let outcome = run(&RunConfig::new(&input, &output, "object:object")).unwrap();

    assert_eq!(outcome.report.column("a").unwrap().inferred, TypeLabel::Bool);
    assert_eq!(fs::read_to_string(&output).unwrap(), "a\ntrue\nfalse\n");
}

#[test]
fn test_duplicate_headers_are_suffixed() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a,a\n1,2\n");
    let output = dir.path().join("output.csv");

    run(&RunConfig::new(&input, &output, "object:object")).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a,a_duplicated_0\n1,2\n");
}
