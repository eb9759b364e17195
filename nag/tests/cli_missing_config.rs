//! Default-location resolution: with no usable config anywhere, the error
//! must name every attempted location and exit non-zero.

use std::fs;
use std::process::Command;

use nag::exit_codes;

#[test]
fn missing_config_at_default_locations_names_all_candidates() {
    let temp = tempfile::tempdir().expect("tempdir");
    let home = temp.path().join("home");
    let xdg_config = temp.path().join("xdg-config");
    let xdg_cache = temp.path().join("xdg-cache");
    fs::create_dir_all(&home).expect("create home");
    fs::create_dir_all(&xdg_config).expect("create config dir");
    fs::create_dir_all(&xdg_cache).expect("create cache dir");

    let output = Command::new(env!("CARGO_BIN_EXE_nag"))
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &xdg_config)
        .env("XDG_CACHE_HOME", &xdg_cache)
        .output()
        .expect("run nag");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no config file found in"),
        "stderr was: {stderr}"
    );
    assert!(stderr.contains("nag.json"), "stderr was: {stderr}");
    assert!(stderr.contains(".nag.json"), "stderr was: {stderr}");
}
