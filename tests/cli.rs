//! End-to-end tests for the `ott-view` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn ott_view() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ott-view"))
}

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_no_file_shows_upload_page() {
    let output = ott_view().output().unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Disney+ OTT Metadata Tagger\n"));
    assert!(stdout.contains("Welcome to the metadata tagging system"));
    assert!(stdout.contains("Upload your metadata file (.csv)"));
    assert!(!stdout.contains("File uploaded successfully!"));
}

#[test]
fn test_valid_csv_prints_table() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "titles.csv", b"name,year\nMoana,2016\nEncanto,2021\n");

    let output = ott_view().arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("File uploaded successfully!"));
    assert!(stdout.contains("0  Moana    2016"));
    assert!(stdout.contains("1  Encanto  2021"));
    assert!(stdout.contains("[2 rows x 2 columns]"));
}

#[test]
fn test_malformed_csv_reports_error_and_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.csv", b"a,b\n1,2,3\n");

    let output = ott_view().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("An error occurred: "), "Got: {stdout}");
    assert!(!stdout.contains("File uploaded successfully!"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "titles.csv", b"name,year\nMoana,2016\n");

    let output = ott_view()
        .args([path.as_str(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(value["rows"][0]["name"], "Moana");
    assert_eq!(value["rows"][0]["year"], "2016");
}

#[test]
fn test_non_csv_extension_refused() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", b"a,b\n1,2\n");

    let output = ott_view().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let output = ott_view().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error opening file"), "Got: {stderr}");
}

#[test]
fn test_stdin_with_delimiter() {
    let mut child = ott_view()
        .args(["-", "--delimiter", ";"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"title;type\nBolt;Movie\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("0  Bolt   Movie"));
}
