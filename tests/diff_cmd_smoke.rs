use std::fs;
use std::path::PathBuf;

use gates_diff::diff_cmd::{self, DiffOptions, OutputFormat};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn diff_writes_markdown_report() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("gates-diff.toml");
    fs::write(&config_path, "[report]\nrepository = \"noir-lang/noir\"\n").unwrap();
    let out_path = dir.path().join("out/diff.md");

    let diff = diff_cmd::run(DiffOptions {
        base: fixture("base_report.json"),
        report: fixture("compare_report.json"),
        format: OutputFormat::Markdown,
        commit: Some("abc123".to_string()),
        ref_commit: Some("def456".to_string()),
        config: Some(config_path),
        out: Some(out_path.clone()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(diff.programs.len(), 2);
    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, include_str!("fixtures/expected_diff.md").trim_end());
}

#[test]
fn diff_renders_json() {
    let (diff, output) = diff_cmd::diff(&DiffOptions {
        base: fixture("base_report.json"),
        report: fixture("compare_report.json"),
        format: OutputFormat::Json,
        ..Default::default()
    })
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["programs"].as_array().map(|p| p.len()), Some(diff.programs.len()));
    assert_eq!(value["contracts"][0]["name"], "Token");
}

#[test]
fn diff_rejects_invalid_quantile() {
    let err = diff_cmd::diff(&DiffOptions {
        base: fixture("base_report.json"),
        report: fixture("compare_report.json"),
        summary_quantile: Some(1.5),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("summary quantile"));
}

#[test]
fn diff_reports_missing_input() {
    let dir = tempdir().unwrap();
    let err = diff_cmd::diff(&DiffOptions {
        base: dir.path().join("missing.json"),
        report: fixture("compare_report.json"),
        ..Default::default()
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}

#[test]
fn diff_reports_malformed_input() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{\"programs\": 3}").unwrap();

    let err = diff_cmd::diff(&DiffOptions {
        base: broken,
        report: fixture("compare_report.json"),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("failed to parse workspace report"));
}
