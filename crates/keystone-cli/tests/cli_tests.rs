//! End-to-end tests for the `keystone` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn keystone() -> Command {
    let mut cmd = Command::cargo_bin("keystone").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn json_output(args: &[&str]) -> Value {
    let output = keystone().args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// PROJECT
// =============================================================================

#[test]
fn test_project_table() {
    keystone()
        .args(["project", "--principal", "100000", "--years", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$371,293"))
        .stdout(predicate::str::contains("$271,293"))
        .stdout(predicate::str::contains("3.713x"))
        .stdout(predicate::str::contains("$54,259"))
        .stdout(predicate::str::contains("30.0%"));
}

#[test]
fn test_project_schedule() {
    keystone()
        .args(["project", "-p", "100000", "-y", "2", "--schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$130,000"))
        .stdout(predicate::str::contains("$169,000"));
}

#[test]
fn test_project_json() {
    let json = json_output(&["--format", "json", "project", "-p", "200000", "-y", "2", "-r", "10"]);
    assert_eq!(json["finalValue"], 242000.0);
    assert_eq!(json["input"]["years"], 2);
    assert_eq!(json["schedule"].as_array().unwrap().len(), 2);
}

#[test]
fn test_project_outside_bounds_warns() {
    keystone()
        .args(["project", "--principal", "1000000", "--years", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("principal"))
        .stdout(predicate::str::contains("$3,712,930"));
}

#[test]
fn test_project_invalid_rate_fails() {
    keystone()
        .args(["project", "-p", "100000", "-y", "5", "--rate", "-150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("annual rate"));
}

#[test]
fn test_project_zero_years_fails() {
    keystone()
        .args(["project", "-p", "100000", "-y", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("years must be positive"));
}

// =============================================================================
// METRICS
// =============================================================================

#[test]
fn test_metrics_table() {
    keystone()
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("41 Stuart Ave"))
        .stdout(predicate::str::contains("+24.6%"))
        .stdout(predicate::str::contains("0.67x*"))
        .stdout(predicate::str::contains("* reported value"));
}

#[test]
fn test_metrics_json() {
    let json = json_output(&["--format", "json", "metrics"]);
    let metrics = json.as_array().unwrap();
    assert_eq!(metrics.len(), 11);

    let stuart = metrics
        .iter()
        .find(|m| m["propertyId"] == "41-stuart-ave")
        .unwrap();
    assert_eq!(stuart["irr"]["source"], "computed");
    assert_eq!(stuart["totalProfit"], 304000.0);
}

#[test]
fn test_metrics_from_csv_file() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(
        b"id,name,city,state,units,acquisitionDate,acquisitionPrice,salePrice,saleDate,totalCashflow,status,yearsHeld\n\
          41-stuart-ave,41 Stuart Ave,New London,CT,3,2020-05-01,195000,375000,2024-05-01,144000,sold,4.0\n",
    )
    .unwrap();
    file.flush().unwrap();

    keystone()
        .args(["--format", "csv", "metrics", "--data"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("property,status"))
        .stdout(predicate::str::contains("41 Stuart Ave,sold"));
}

#[test]
fn test_metrics_missing_file_fails() {
    keystone()
        .args(["metrics", "--data", "/nonexistent/keystone/properties.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load properties"));
}

// =============================================================================
// SUMMARY
// =============================================================================

#[test]
fn test_summary_table() {
    keystone()
        .args(["summary", "--by-state"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 (3 current, 8 sold)"))
        .stdout(predicate::str::contains("$7.11M"))
        .stdout(predicate::str::contains("$747K"))
        .stdout(predicate::str::contains("37.2%"))
        .stdout(predicate::str::contains("FL"));
}

#[test]
fn test_summary_json() {
    let json = json_output(&["summary", "--format", "json"]);
    assert_eq!(json["summary"]["totalUnits"], 37);
    assert_eq!(json["summary"]["totalPortfolioValue"], 7110000.0);
    assert_eq!(json["currentHoldings"]["propertyCount"], 3);
    assert_eq!(json["exits"]["soldCount"], 8);
    assert!(json.get("states").is_none());
}
