//! Drive the built `resume-extract` binary end to end.

mod common;

use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_resume-extract"));
    cmd.current_dir(dir)
        .args(args)
        .env_remove("RESUME_NER_BACKEND")
        .env_remove("RESUME_NER_URL")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run resume-extract")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout:?}");
    serde_json::from_str(stdout.trim_end()).unwrap()
}

#[test]
fn no_arguments_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &[], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"error": "PDF path not provided"})
    );
}

#[test]
fn too_many_arguments_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["a.pdf", "b.pdf"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error"], "PDF path not provided");
}

#[test]
fn unreadable_path_reports_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["does-not-exist.pdf"], &[]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj["error"].as_str().unwrap().contains("No such file"));
}

#[test]
fn extracts_fields_from_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("resume.pdf");
    std::fs::write(
        &pdf,
        common::minimal_pdf(&[&[
            "Jane Doe",
            "123 Main Street",
            "Springfield, IL",
            "Phone: (415) 555-1234",
            "Senior Software Engineer at Acme",
        ]]),
    )
    .unwrap();

    let output = run(
        dir.path(),
        &[pdf.to_str().unwrap()],
        &[("RESUME_NER_BACKEND", "rules")],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({
            "name": "Jane Doe",
            "phone": "(415) 555-1234",
            "address": "123 Main Street Springfield IL",
            "role": "Senior Software Engineer",
        })
    );
}

#[test]
fn no_phone_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("resume.pdf");
    std::fs::write(&pdf, common::minimal_pdf(&[&["Ann Lee", "Research Professor"]])).unwrap();

    let output = run(
        dir.path(),
        &[pdf.to_str().unwrap()],
        &[("RESUME_NER_BACKEND", "rules")],
    );
    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["phone"], serde_json::Value::Null);
    assert_eq!(json["name"], "Ann Lee");
    assert_eq!(json["role"], "Research Professor");
}

#[test]
fn unreachable_oracle_is_not_json() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("resume.pdf");
    std::fs::write(&pdf, common::minimal_pdf(&[&["Jane Doe"]])).unwrap();

    let output = run(
        dir.path(),
        &[pdf.to_str().unwrap()],
        &[("RESUME_NER_URL", "http://127.0.0.1:9/ner"), ("RESUME_NER_TIMEOUT", "5")],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn unknown_oracle_backend_is_not_json() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("resume.pdf");
    std::fs::write(&pdf, common::minimal_pdf(&[&["Jane Doe"]])).unwrap();

    let output = run(
        dir.path(),
        &[pdf.to_str().unwrap()],
        &[("RESUME_NER_BACKEND", "spacy")],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown entity oracle backend"));
}
