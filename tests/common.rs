#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tfl() -> Command {
    cargo_bin_cmd!("timeflow")
}

/// Create a unique test log path inside the system temp dir and remove any
/// existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeflow.log", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Seed a log file with pre-built content
pub fn seed_log(log_path: &str, content: &str) {
    fs::write(log_path, content).expect("seed log file");
}

/// A single tracked day used by several stats tests:
/// one slack interval (09:00→12:00, closed by the `**` entry) and two
/// work intervals (12:00→13:00 and 13:00→17:00).
pub const SAMPLE_DAY: &str = "\
2024-01-01 09:00: arrived
2024-01-01 12:00: lunch **
2024-01-01 13:00: back
2024-01-01 17:00: leaving
";
