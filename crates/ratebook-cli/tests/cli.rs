//! End-to-end runs of the `ratebook` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const TABLE: &str = "\
Bond name , Maturity,Coupon rate,FV,Yield,ISIN
UK 10y Gilt,2034-06-15,4.25,1000,4.25,GB00A
US 5Y Note,2030-05-31,4.0,1000,4.1,US00B
Brazil 10Y,2034-01-01,10,1000,11,BR00C
Germany 10Y Bund,2035-02-15,2.5,1000,2.6,DE00D
";

fn ratebook() -> Command {
    let mut cmd = Command::cargo_bin("ratebook").unwrap();
    cmd.env_remove("RATEBOOK_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_table(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("bonds.csv");
    fs::write(&path, TABLE).unwrap();
    path
}

#[test]
fn vanilla_prints_report_and_isolates_bad_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path());
    let output = dir.path().join("priced.csv");

    ratebook()
        .args(["vanilla", "--valuation-date", "2025-06-13", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculations using issue date:"))
        .stdout(predicate::str::contains(
            "UK         | 2024-06-15 | 2034-06-15 |     100.00 | UK 10y Gilt",
        ))
        .stdout(predicate::str::contains("Error processing bond at row 3"))
        .stdout(predicate::str::contains("Germany    | 2025-02-15"));

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "Bond name,Maturity,Coupon rate,FV,Yield,ISIN,Bond Price");
    assert!(lines[1].starts_with("UK 10y Gilt,2034-06-15,4.25,1000,4.25,GB00A,"));
    assert!(lines[3].ends_with("BR00C,"));
    let price: f64 = lines[1].rsplit(',').next().unwrap().parse().unwrap();
    assert!((price - 100.0).abs() < 0.05);
}

#[test]
fn vanilla_comparison_pass_uses_valuation_as_issue() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path());

    ratebook()
        .args(["vanilla", "--valuation-date", "2025-06-13", "--compare-today-issue"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculations using todays date:"))
        .stdout(predicate::str::contains("UK         | 2025-06-13 | 2034-06-15"));
}

#[test]
fn comparison_pass_does_not_change_written_prices() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path());
    let plain = dir.path().join("plain.csv");
    let compared = dir.path().join("compared.csv");

    for (output, compare) in [(&plain, false), (&compared, true)] {
        let mut cmd = ratebook();
        cmd.args(["vanilla", "--valuation-date", "2025-06-13", "--input"])
            .arg(&input)
            .arg("--output")
            .arg(output);
        if compare {
            cmd.arg("--compare-today-issue");
        }
        cmd.assert().success();
    }

    assert_eq!(
        fs::read_to_string(&plain).unwrap(),
        fs::read_to_string(&compared).unwrap()
    );
}

#[test]
fn vanilla_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path());

    let assert = ratebook()
        .args(["--format", "json", "vanilla", "--valuation-date", "2025-06-13"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["priced"]["country"], "UK");
    assert!(rows[2]["error"].as_str().unwrap().contains("Brazil"));
}

#[test]
fn missing_column_aborts_before_pricing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bonds.csv");
    fs::write(&input, "Bond name,Maturity,Coupon rate,FV\nUK 10y,2034-06-15,4.25,1000\n").unwrap();
    let output = dir.path().join("out.csv");

    ratebook()
        .args(["vanilla", "--valuation-date", "2025-06-13", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no 'Yield' column"));
    assert!(!output.exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    ratebook()
        .args(["vanilla", "--input"])
        .arg(dir.path().join("absent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading bond table"));
}

#[test]
fn config_file_supplies_paths_and_term_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bonds.csv");
    fs::write(
        &input,
        "Bond name,Maturity,Coupon rate,FV,Yield\nUK 2034 Gilt 10y,2034-06-15,4.25,1000,4.25\n",
    )
    .unwrap();
    let output = dir.path().join("priced.csv");
    let config = dir.path().join("ratebook.toml");
    fs::write(
        &config,
        format!(
            "[vanilla]\ninput = {:?}\noutput = {:?}\nterm_pattern = '(\\d+)\\s*[yY]'\n",
            input.display().to_string(),
            output.display().to_string()
        ),
    )
    .unwrap();

    ratebook()
        .arg("--config")
        .arg(&config)
        .args(["vanilla", "--valuation-date", "2025-06-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UK         | 2024-06-15"));
    assert!(output.exists());
}

#[test]
fn floating_reports_prices_and_breakdown() {
    ratebook()
        .args(["floating", "--valuation-date", "2025-02-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixing needed for: 2025-02-11"))
        .stdout(predicate::str::contains("Net Present Value (NPV) of the floating rate bond:"))
        .stdout(predicate::str::contains("Clean floating rate bond price is: 10"))
        .stdout(predicate::str::contains("Dirty floating rate bond price is:"))
        .stdout(predicate::str::contains("FloatingRateCoupon"))
        .stdout(predicate::str::contains("Redemption"));
}

#[test]
fn floating_writes_zero_curve() {
    let dir = tempfile::tempdir().unwrap();
    let curve = dir.path().join("zero.csv");
    ratebook()
        .args(["floating", "--valuation-date", "2025-02-13", "--interpolation", "flat-forward"])
        .arg("--curve-out")
        .arg(&curve)
        .assert()
        .success();

    let written = fs::read_to_string(&curve).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 361);
    assert_eq!(lines[0], "date,time,zero_rate");
    assert!(lines[1].starts_with("2025-03-13,"));
    assert!(lines[360].starts_with("2055-02-13,"));
}

#[test]
fn floating_json_output() {
    let assert = ratebook()
        .args(["-f", "json", "floating", "--valuation-date", "2025-02-13"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["required_fixings"].as_array().unwrap().len(), 4);
    assert_eq!(json["valuation"]["cash_flows"].as_array().unwrap().len(), 5);
    assert!(json["valuation"]["npv"].as_f64().unwrap() > 1_000_000.0);
}
