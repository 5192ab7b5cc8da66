use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_DAY, seed_log, setup_test_log, tfl};

#[test]
fn test_init_creates_log_file() {
    let log_path = setup_test_log("init_creates_log");

    tfl()
        .args(["--file", &log_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Timeflow initialization completed!"));

    let content = fs::read_to_string(&log_path).expect("log file created");
    assert_eq!(content, "");
}

#[test]
fn test_log_appends_one_line() {
    let log_path = setup_test_log("log_appends");

    tfl()
        .args(["--file", &log_path, "log", "reading", "mail"])
        .assert()
        .success()
        .stdout(contains("Logged: reading mail"));

    let content = fs::read_to_string(&log_path).expect("read log");
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with(&today));
    assert!(content.ends_with(": reading mail\n"));
}

#[test]
fn test_log_same_day_inserts_no_separator() {
    let log_path = setup_test_log("log_same_day");

    tfl()
        .args(["--file", &log_path, "arrived"])
        .assert()
        .success()
        .stdout(contains("Day start recorded"));

    tfl()
        .args(["--file", &log_path, "log", "first task"])
        .assert()
        .success();

    let content = fs::read_to_string(&log_path).expect("read log");
    assert_eq!(content.lines().count(), 2);
    assert!(!content.contains("\n\n"));
}

#[test]
fn test_log_on_new_day_inserts_one_separator() {
    let log_path = setup_test_log("log_new_day");
    seed_log(&log_path, "2020-01-01 17:00: leaving\n");

    tfl()
        .args(["--file", &log_path, "log", "back again"])
        .assert()
        .success();

    let content = fs::read_to_string(&log_path).expect("read log");
    assert!(content.contains("leaving\n\n"));
    assert!(!content.contains("\n\n\n"));
    assert!(content.ends_with(": back again\n"));
}

#[test]
fn test_stats_for_a_single_day() {
    let log_path = setup_test_log("stats_single_day");
    seed_log(&log_path, SAMPLE_DAY);

    tfl()
        .args([
            "--file",
            &log_path,
            "stats",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("Work: 05h 00min"))
        .stdout(contains("Slack: 03h 00min"));
}

#[test]
fn test_stats_period_equals_explicit_bounds() {
    let log_path = setup_test_log("stats_period_bounds");
    seed_log(&log_path, SAMPLE_DAY);

    let by_period = tfl()
        .args(["--file", &log_path, "stats", "--period", "2024-01"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let by_bounds = tfl()
        .args([
            "--file",
            &log_path,
            "stats",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(by_period, by_bounds);
}

#[test]
fn test_stats_empty_range_prints_zero_totals() {
    let log_path = setup_test_log("stats_empty_range");
    seed_log(&log_path, SAMPLE_DAY);

    tfl()
        .args(["--file", &log_path, "stats", "--period", "2030"])
        .assert()
        .success()
        .stdout(contains("Work: 00h 00min"))
        .stdout(contains("Slack: 00h 00min"));
}

#[test]
fn test_stats_rejects_invalid_period() {
    let log_path = setup_test_log("stats_invalid_period");
    seed_log(&log_path, SAMPLE_DAY);

    tfl()
        .args(["--file", &log_path, "stats", "--period", "january"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_stats_fails_on_malformed_log_line() {
    let log_path = setup_test_log("stats_malformed");
    seed_log(&log_path, "2024-01-01 09:00: arrived\nnot a log line\n");

    tfl()
        .args(["--file", &log_path, "stats", "--period", "2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid log line"));
}

#[test]
fn test_list_filters_by_period() {
    let log_path = setup_test_log("list_filters");
    seed_log(
        &log_path,
        "2024-01-01 09:00: arrived\n2024-01-01 17:00: january task\n\n2024-02-01 09:00: february task\n",
    );

    tfl()
        .args(["--file", &log_path, "list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("january task"))
        .stdout(contains("february task").not());
}

#[test]
fn test_list_range_period_spans_both_months() {
    let log_path = setup_test_log("list_range_period");
    seed_log(
        &log_path,
        "2024-01-01 09:00: january task\n\n2024-02-01 09:00: february task\n",
    );

    tfl()
        .args(["--file", &log_path, "list", "--period", "2024-01:2024-02"])
        .assert()
        .success()
        .stdout(contains("january task"))
        .stdout(contains("february task"));
}

#[test]
fn test_list_empty_period_reports_no_entries() {
    let log_path = setup_test_log("list_empty_period");
    seed_log(&log_path, SAMPLE_DAY);

    tfl()
        .args(["--file", &log_path, "list", "--period", "2030"])
        .assert()
        .success()
        .stdout(contains("No entries from 2030-01-01 to 2030-12-31"));
}
