//! Integration tests for command execution against real files

use crate::common::TestFixture;
use std::fs;
use tabalign::cli::Commands;
use tabalign::commands::execute_command;
use tabalign::TabalignError;

fn align_command(
    control: &str,
    test: &str,
    keys: &[&str],
    output: Option<std::path::PathBuf>,
    format: &str,
) -> Commands {
    Commands::Align {
        control: control.to_string(),
        test: test.to_string(),
        keys: keys.iter().map(|k| k.to_string()).collect(),
        output,
        format: format.to_string(),
        quiet: true,
    }
}

#[test]
fn test_align_writes_output_file() {
    let fixture = TestFixture::new().unwrap();
    let control = fixture
        .create_tsv_rows("control.tsv", &[&["K", "V"], &["a", "1"], &["b", "2"]])
        .unwrap();
    let test = fixture
        .create_tsv_rows("test.tsv", &[&["K", "V"], &["b", "2"]])
        .unwrap();
    let output = fixture.root().join("out.tsv");

    execute_command(align_command(
        control.to_str().unwrap(),
        test.to_str().unwrap(),
        &["K"],
        Some(output.clone()),
        "pretty",
    ))
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.split('\n').collect();
    assert_eq!(lines[0], "K\tV\t\tK\tV");
    assert_eq!(lines[1], "a\t1\t\t\t");
    assert_eq!(lines[2], "b\t2\t\tb\t2");
}

#[test]
fn test_align_writes_json_output_file() {
    let fixture = TestFixture::new().unwrap();
    let control = fixture
        .create_tsv_rows("control.tsv", &[&["K", "V"], &["a", "1"]])
        .unwrap();
    let test = fixture
        .create_tsv_rows("test.tsv", &[&["K", "V"], &["a", "1"]])
        .unwrap();
    let output = fixture.root().join("out.json");

    execute_command(align_command(
        control.to_str().unwrap(),
        test.to_str().unwrap(),
        &["K"],
        Some(output.clone()),
        "json",
    ))
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["pair_count"], 1);
    assert_eq!(value["matched"], 1);
}

#[test]
fn test_align_missing_input_file() {
    let fixture = TestFixture::new().unwrap();
    let test = fixture
        .create_tsv_rows("test.tsv", &[&["K"], &["a"]])
        .unwrap();

    let err = execute_command(align_command(
        fixture.root().join("nope.tsv").to_str().unwrap(),
        test.to_str().unwrap(),
        &[],
        None,
        "pretty",
    ))
    .unwrap_err();
    assert!(err.to_string().contains("File not found"));
}

#[test]
fn test_align_rejects_double_stdin() {
    let err = execute_command(align_command("-", "-", &[], None, "pretty")).unwrap_err();
    assert!(matches!(err, TabalignError::InvalidInput { .. }));
}

#[test]
fn test_align_rejects_bad_format() {
    let fixture = TestFixture::new().unwrap();
    let control = fixture
        .create_tsv_rows("control.tsv", &[&["K"], &["a"]])
        .unwrap();
    let test = fixture
        .create_tsv_rows("test.tsv", &[&["K"], &["a"]])
        .unwrap();

    let err = execute_command(align_command(
        control.to_str().unwrap(),
        test.to_str().unwrap(),
        &[],
        None,
        "yaml",
    ))
    .unwrap_err();
    assert!(err.to_string().contains("Invalid output format"));
}

#[test]
fn test_fatal_error_produces_no_output_file() {
    let fixture = TestFixture::new().unwrap();
    let control = fixture
        .create_tsv_rows("control.tsv", &[&["A", "B", "C"], &["1", "2", "3"]])
        .unwrap();
    let test = fixture
        .create_tsv_rows("test.tsv", &[&["A", "B"], &["1", "2"]])
        .unwrap();
    let output = fixture.root().join("out.tsv");

    let result = execute_command(align_command(
        control.to_str().unwrap(),
        test.to_str().unwrap(),
        &[],
        Some(output.clone()),
        "pretty",
    ));
    assert!(result.is_err());
    // No partial results on a fatal error.
    assert!(!output.exists());
}

#[test]
fn test_fields_command_runs() {
    let fixture = TestFixture::new().unwrap();
    let input = fixture
        .create_tsv_rows("data.tsv", &[&["Check Date", "Amount (USD)"], &["x", "y"]])
        .unwrap();

    execute_command(Commands::Fields {
        input: input.to_str().unwrap().to_string(),
    })
    .unwrap();
}
