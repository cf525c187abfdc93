use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pulsewrap_cli").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--plain")
        .arg("--config")
        .arg(temp.path().join("config.json"));
    cmd
}

#[test]
fn recap_prints_sections() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .args(["recap", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Demo B · October 28–November 2, 2025 ==="))
        .stdout(predicate::str::contains("You ran at a loss"))
        .stdout(predicate::str::contains("Record signups: October 31, 2025"));
}

#[test]
fn markdown_written_to_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("report.md");
    cli(&temp)
        .args(["--date", "2025-11-08", "markdown", "A"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote report to"));

    let report = fs::read_to_string(&target).unwrap();
    assert!(report.starts_with("# PulseWrap KPI Recap\n\n**Dataset:** Demo A\n**Generated:** November 8, 2025\n"));
    assert!(report.contains("## Runway\n"));
}

#[test]
fn recap_files_reports_malformed_input() {
    let temp = TempDir::new().unwrap();
    let kpi = temp.path().join("kpi.json");
    let spend = temp.path().join("spend.json");
    fs::write(&kpi, r#"{"date": "2025-11-01"}"#).unwrap();
    fs::write(&spend, "[]").unwrap();

    cli(&temp)
        .arg("recap-files")
        .arg(&kpi)
        .arg(&spend)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: KPI dataset is malformed"));
}

#[test]
fn recap_files_json_output() {
    let temp = TempDir::new().unwrap();
    let kpi = temp.path().join("week.json");
    let spend = temp.path().join("spend.json");
    fs::write(
        &kpi,
        r#"[{"date":"2025-11-01","revenue":10,"expenses":4,"activeUsers":3,"newUsers":1}]"#,
    )
    .unwrap();
    fs::write(&spend, "[]").unwrap();

    let output = cli(&temp)
        .arg("--json")
        .arg("recap-files")
        .arg(&kpi)
        .arg(&spend)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["dataset_name"], "week");
    assert_eq!(value["insights"][0]["title"], "Total Revenue");
    assert_eq!(value["insights"][0]["type"], "TOTAL_REVENUE");
    assert_eq!(value["period"], "November 1, 2025");
}

#[test]
fn empty_kpi_file_fails() {
    let temp = TempDir::new().unwrap();
    let kpi = temp.path().join("kpi.json");
    fs::write(&kpi, "[]").unwrap();

    cli(&temp)
        .arg("recap-files")
        .arg(&kpi)
        .arg(&kpi)
        .assert()
        .failure()
        .stderr(predicate::str::contains("KPI dataset is empty"));
}

#[test]
fn config_data_dir_is_honoured() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("kpi_daily_A.json"),
        r#"[{"date":"2025-06-01","revenue":1,"expenses":1,"activeUsers":1,"newUsers":1}]"#,
    )
    .unwrap();
    fs::write(data.join("category_spend_A.json"), "[]").unwrap();
    fs::write(
        temp.path().join("config.json"),
        serde_json::json!({ "data_dir": data, "report_title": "June" }).to_string(),
    )
    .unwrap();

    cli(&temp)
        .args(["markdown", "A"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# June\n"));

    cli(&temp)
        .args(["recap", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn preview_pretty_prints() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("raw.json");
    fs::write(&file, r#"[{"a":1}]"#).unwrap();
    cli(&temp)
        .arg("preview")
        .arg(&file)
        .assert()
        .success()
        .stdout("[\n  {\n    \"a\": 1\n  }\n]\n");
}

#[test]
fn unknown_command_prints_usage() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .arg("launch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: pulsewrap_cli"));
}
