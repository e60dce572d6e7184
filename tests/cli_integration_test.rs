//! End-to-end tests for the bmical binary.
//!
//! Each test runs the compiled binary the way a user would and asserts on
//! rendered output or produced files.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn bmical() -> Command {
    Command::cargo_bin("bmical").expect("binary builds")
}

#[test]
fn test_calculate_healthy_example_renders_two_decimals() {
    let assert = bmical()
        .args([
            "calculate", "--weight", "70", "--height", "175", "--unit", "cm", "--plain",
        ])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Your BMI is 22.86."), "stdout: {output}");
    assert!(output.contains("You are Healthy"), "stdout: {output}");
}

#[test]
fn test_calculate_feet_example_flags_extreme_underweight() {
    let assert = bmical()
        .args([
            "calculate", "--weight", "50", "--height", "6", "--unit", "ft", "--plain",
        ])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Your BMI is 14.94."), "stdout: {output}");
    assert!(
        output.contains("You are Extremely Underweight"),
        "stdout: {output}"
    );
}

#[test]
fn test_calculate_meters_needs_no_unit_flag_conversion() {
    let assert = bmical()
        .args([
            "calculate", "--weight", "70", "--height", "1.75", "--unit", "m", "--plain",
        ])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Your BMI is 22.86."), "stdout: {output}");
}

#[test]
fn test_calculate_rejects_zero_height() {
    let assert = bmical()
        .args([
            "calculate", "--weight", "70", "--height", "0", "--unit", "cm",
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("height"), "stderr: {stderr}");
}

#[test]
fn test_calculate_rejects_negative_weight() {
    bmical()
        .args([
            "calculate", "--weight", "-70", "--height", "175", "--unit", "cm",
        ])
        .assert()
        .failure();
}

#[test]
fn test_calculate_json_report_structure() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.json");

    bmical()
        .args([
            "calculate",
            "--weight",
            "70",
            "--height",
            "175",
            "--unit",
            "cm",
            "--format",
            "json",
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output_path).expect("report file written");
    let json: Value = serde_json::from_str(&content).expect("output is valid JSON");

    assert_eq!(json["measurement"]["weight_kg"], 70.0);
    assert_eq!(json["measurement"]["unit"], "cm");
    assert_eq!(json["result"]["band"], "healthy");
    assert_eq!(json["result"]["severity"], "info");
    assert!(json["timestamp"].is_string());

    let height_meters = json["height_meters"].as_f64().unwrap();
    assert!((height_meters - 1.75).abs() < 1e-12);

    let value = json["result"]["value"].as_f64().unwrap();
    assert!((value - 22.857142857142858).abs() < 1e-9);
}

#[test]
fn test_calculate_markdown_report() {
    let assert = bmical()
        .args([
            "calculate",
            "--weight",
            "100",
            "--height",
            "1.7",
            "--unit",
            "m",
            "--format",
            "markdown",
        ])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("# BMI Report"), "stdout: {output}");
    assert!(output.contains("| BMI | 34.60 |"), "stdout: {output}");
    assert!(
        output.contains("| Band | Extremely Overweight |"),
        "stdout: {output}"
    );
}

#[test]
fn test_configured_default_unit_applies_without_flag() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".bmical.toml"),
        "[input]\ndefault_unit = \"m\"\n",
    )
    .unwrap();

    let assert = bmical()
        .current_dir(temp_dir.path())
        .args(["calculate", "--weight", "70", "--height", "1.75", "--plain"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Your BMI is 22.86."), "stdout: {output}");
}

#[test]
fn test_init_creates_config_and_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();

    bmical()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp_dir.path().join(".bmical.toml").is_file());

    bmical()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure();

    bmical()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_interactive_session_counts_calculations() {
    let assert = bmical()
        .args(["interactive", "--plain"])
        .write_stdin("70\ncm\n175\n50\nft\n6\nq\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Your BMI is 22.86."), "stdout: {output}");
    assert!(output.contains("Your BMI is 14.94."), "stdout: {output}");
    assert!(
        output.contains("Calculations this session: 2"),
        "stdout: {output}"
    );
}
