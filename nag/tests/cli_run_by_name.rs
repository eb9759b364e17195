//! End-to-end tests for `--name`: unconditional single-entry runs.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use chrono::{Duration, Local};
use nag::exit_codes;

fn run_nag_name(config: &Path, history: &Path, name: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nag"))
        .arg("--config")
        .arg(config)
        .arg("--history")
        .arg(history)
        .arg("--name")
        .arg(name)
        .output()
        .expect("run nag")
}

#[test]
fn unknown_name_exits_nonzero_without_touching_history() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("config.json");
    fs::write(
        &config,
        r#"[{"name": "known", "command": "false", "interval": 1}]"#,
    )
    .expect("write config");
    let history = temp.path().join("last_run.json");

    let output = run_nag_name(&config, &history, "missing");

    assert_eq!(output.status.code(), Some(exit_codes::UNKNOWN_ENTRY));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no entry named \"missing\""),
        "stderr was: {stderr}"
    );
    assert!(!history.exists(), "no history mutation on failure");
}

#[test]
fn explicit_name_runs_even_when_not_due() {
    let temp = tempfile::tempdir().expect("tempdir");
    let marker = temp.path().join("ran.txt");
    let config = temp.path().join("config.json");
    fs::write(
        &config,
        format!(
            r#"[{{"name": "fresh", "command": "echo ran >> {}", "interval": 30}}]"#,
            marker.display()
        ),
    )
    .expect("write config");
    let history = temp.path().join("last_run.json");
    let an_hour_ago = Local::now().naive_local() - Duration::hours(1);
    fs::write(
        &history,
        format!(
            "{{\n  \"fresh\": \"{}\"\n}}\n",
            an_hour_ago.format("%Y-%m-%dT%H:%M:%S%.6f")
        ),
    )
    .expect("seed history");

    let output = run_nag_name(&config, &history, "fresh");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(marker.exists(), "command ran despite not being due");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Run now?"), "no prompt in name mode");

    let contents = fs::read_to_string(&history).expect("read history");
    let map: std::collections::BTreeMap<String, String> =
        serde_json::from_str(&contents).expect("parse history");
    let recorded = chrono::NaiveDateTime::parse_from_str(
        map.get("fresh").expect("entry"),
        "%Y-%m-%dT%H:%M:%S%.f",
    )
    .expect("parseable timestamp");
    assert!(
        recorded > an_hour_ago + Duration::minutes(30),
        "history refreshed to now"
    );
}
