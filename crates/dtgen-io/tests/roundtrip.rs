//! Read/write round-trip tests.

use std::fs;

use dtgen_io::{IoError, read_csv_table, write_csv_table};

fn round_trip(content: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, content).unwrap();

    let mut df = read_csv_table(&input).unwrap();
    write_csv_table(&mut df, &output).unwrap();
    fs::read_to_string(&output).unwrap()
}

#[test]
fn test_round_trip_preserves_simple_tables() {
    for content in [
        "a,b\n1,2.5\n3,4.5\n",
        "a\nfoo\nbar\n",
        "id,name,active\n1,ann,true\n2,,false\n",
    ] {
        assert_eq!(round_trip(content), content);
    }
}

#[test]
fn test_round_trip_keeps_quoted_fields() {
    let content = "name,note\nann,\"a, b\"\n";
    assert_eq!(round_trip(content), content);
}

#[test]
fn test_header_only_file_has_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, "a,b\n").unwrap();

    let df = read_csv_table(&input).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn test_missing_input_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.csv");
    let err = read_csv_table(&input).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { ref path } if path == &input));
}
