//! End-to-end integration tests for the attendance CLI.
//!
//! Tests the full pipeline: ingest a CSV export, classify shifts,
//! reconstruct intervals, and write the flattened CSV output.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn att_binary() -> String {
    env!("CARGO_BIN_EXE_att").to_string()
}

// CH015 checks in twice inside the day window (07:05, 08:10) and once
// outside it (06:51), so the dominant shift is Day Shift. The first two
// dates have paired in/out rows; the third has no check-out and yields
// no interval.
const SAMPLE: &str = "\
Department Number,Department Name,Personnel ID,Employee Name,Time,Verification,Device
0001,Chinese,CH015,WANG PING,2025-09-25 06:51:01,Face,FAC1245200002(CHECK-IN(KITCHEN))
0001,Chinese,CH015,WANG PING,2025-09-25 18:05:00,Face,FAC1245200002(CHECK-OUT(KITCHEN))
0001,Chinese,CH015,WANG PING,2025-09-26 07:05:00,Face,FAC1245200002(CHECK-IN(KITCHEN))
0001,Chinese,CH015,WANG PING,2025-09-26 18:00:00,Face,FAC1245200002(CHECK-OUT(KITCHEN))
0001,Chinese,CH015,WANG PING,2025-09-27 08:10:00,Face,FAC1245200002(CHECK-IN(KITCHEN))
";

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("checkinout.csv");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn test_shifts_classifies_day_worker() {
    let temp = TempDir::new().unwrap();
    let input = write_sample(temp.path());

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("shifts")
        .arg(&input)
        .output()
        .expect("failed to run att shifts");

    assert!(
        output.status.success(),
        "att shifts should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Personnel ID: CH015, Employee Name: WANG PING, Shift: Day Shift\n"
    );
}

#[test]
fn test_intervals_prints_first_in_last_out_pairs() {
    let temp = TempDir::new().unwrap();
    let input = write_sample(temp.path());

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("intervals")
        .arg(&input)
        .output()
        .expect("failed to run att intervals");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Personnel ID: CH015, Employee Name: WANG PING, \
         Possible Shifts: [(\"06:51:01\", \"18:05:00\"), (\"07:05:00\", \"18:00:00\")]\n"
    );
}

#[test]
fn test_intervals_csv_writes_default_path() {
    let temp = TempDir::new().unwrap();
    let input = write_sample(temp.path());

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("intervals")
        .arg(&input)
        .arg("--csv")
        .output()
        .expect("failed to run att intervals --csv");

    assert!(
        output.status.success(),
        "att intervals --csv should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out_path = temp.path().join("checkinout_shifts.csv");
    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        "Personnel ID,Employee Name,Shift Start,Shift End\n\
         CH015,WANG PING,06:51:01,18:05:00\n\
         CH015,WANG PING,07:05:00,18:00:00\n"
    );
}

#[test]
fn test_intervals_output_flag_overrides_path() {
    let temp = TempDir::new().unwrap();
    let input = write_sample(temp.path());
    let out_path = temp.path().join("custom.csv");

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("intervals")
        .arg(&input)
        .arg("--output")
        .arg(&out_path)
        .output()
        .expect("failed to run att intervals --output");

    assert!(output.status.success());
    assert!(out_path.exists(), "custom output path should be written");
}

#[test]
fn test_output_suffix_env_override() {
    let temp = TempDir::new().unwrap();
    let input = write_sample(temp.path());

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .env("ATT_OUTPUT_SUFFIX", "_intervals")
        .arg("intervals")
        .arg(&input)
        .arg("--csv")
        .output()
        .expect("failed to run att intervals --csv");

    assert!(output.status.success());
    assert!(temp.path().join("checkinout_intervals.csv").exists());
}

#[test]
fn test_convert_dumps_table() {
    let temp = TempDir::new().unwrap();
    let input = write_sample(temp.path());
    let out_path = temp.path().join("converted.csv");

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&out_path)
        .output()
        .expect("failed to run att convert");

    assert!(output.status.success());
    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents, SAMPLE);
}

#[test]
fn test_start_row_skips_report_preamble() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("preamble.csv");
    let preamble = format!(
        "Attendance Report,,,,,,\nExported 2025-09-27,,,,,,\n{SAMPLE}"
    );
    std::fs::write(&input, preamble).unwrap();

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("shifts")
        .arg(&input)
        .arg("--start-row")
        .arg("3")
        .output()
        .expect("failed to run att shifts --start-row");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CH015"), "stdout: {stdout}");
    assert!(stdout.contains("Shift: Day Shift"), "stdout: {stdout}");
}

#[test]
fn test_missing_file_fails_with_context() {
    let temp = TempDir::new().unwrap();

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("shifts")
        .arg(temp.path().join("nope.csv"))
        .output()
        .expect("failed to run att shifts");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
}

#[test]
fn test_malformed_rows_are_silently_skipped() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("messy.csv");
    std::fs::write(
        &input,
        "Personnel ID,Employee Name,Time,Device\n\
         ,Nobody,2025-09-25 08:00:00,CHECK-IN\n\
         T001,Bad Clock,not-a-time,CHECK-IN\n\
         D001,Day Worker,2025-09-25 08:00:00,CHECK-IN\n",
    )
    .unwrap();

    let output = Command::new(att_binary())
        .env("HOME", temp.path())
        .arg("shifts")
        .arg(&input)
        .output()
        .expect("failed to run att shifts");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Personnel ID: D001, Employee Name: Day Worker, Shift: Day Shift\n"
    );
}
