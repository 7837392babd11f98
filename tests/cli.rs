//! CLI integration tests for month_grid
//!
//! These run the binary end to end and check stdout, stderr and the exit
//! status for both the success path and every error class.

use predicates::prelude::*;

/// Get a command instance for the month_grid binary
fn month_grid_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("month_grid"))
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_renders_january_2024() {
    let expected = concat!(
        " Sun Mon Tue Wed Thu Fri Sat\n",
        "       1   2   3   4   5   6\n",
        "   7   8   9  10  11  12  13\n",
        "  14  15  16  17  18  19  20\n",
        "  21  22  23  24  25  26  27\n",
        "  28  29  30  31            \n",
    );

    month_grid_cmd()
        .args(["2024", "1"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_renders_december_2023_starting_friday() {
    month_grid_cmd()
        .args(["2023", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "                       1   2\n   3   4   5   6   7   8   9\n",
        ))
        .stdout(predicate::str::ends_with("  31                        \n"));
}

#[test]
fn test_leap_february_has_29_days() {
    month_grid_cmd()
        .args(["2000", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  29"))
        .stdout(predicate::str::contains("  30").not());
}

#[test]
fn test_century_february_has_28_days() {
    month_grid_cmd()
        .args(["1900", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  28"))
        .stdout(predicate::str::contains("  29").not());
}

#[test]
fn test_exact_four_week_month_has_no_trailing_row() {
    // February 2015: Sunday start, 28 days
    month_grid_cmd()
        .args(["2015", "2"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 5))
        .stdout(predicate::str::ends_with("  22  23  24  25  26  27  28\n"));
}

#[test]
fn test_output_is_idempotent() {
    let first = month_grid_cmd().args(["1969", "7"]).output().unwrap();
    let second = month_grid_cmd().args(["1969", "7"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_json_format() {
    month_grid_cmd()
        .args(["--format", "json", "2024", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"{"year":2024,"month":2,"first_weekday":"Thu","days_in_month":29,"rows":[[null,null,null,null,1,2,3],"#,
        ));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    month_grid_cmd()
        .args(["-vv", "2024", "3"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" Sun Mon"))
        .stdout(predicate::str::contains("INFO").not())
        .stderr(predicate::str::contains("rendering calendar"))
        .stderr(predicate::str::contains("laying out month"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_month_13_is_rejected() {
    month_grid_cmd()
        .args(["2024", "13"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid month: 13"));
}

#[test]
fn test_month_0_is_rejected() {
    month_grid_cmd()
        .args(["2024", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid month: 0"));
}

#[test]
fn test_negative_month_reaches_validation() {
    month_grid_cmd()
        .args(["2024", "-3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid month: -3"));
}

#[test]
fn test_year_zero_is_rejected() {
    month_grid_cmd()
        .args(["0", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid year: 0"));
}

#[test]
fn test_non_integer_argument_names_the_field() {
    month_grid_cmd()
        .args(["2024", "March"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid month"))
        .stderr(predicate::str::contains("not a decimal integer"));
}

#[test]
fn test_missing_argument_prints_usage() {
    month_grid_cmd()
        .arg("2024")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}
