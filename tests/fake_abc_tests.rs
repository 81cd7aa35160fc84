#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

const FAKE_ABC: &str = r#"#!/bin/sh
case "$2" in
  *resyn2*) echo "top : i/o = 8/ 8  lat = 0  nd = 100  edge = 300  lev = 10" ;;
  *broken.blif*) echo "Error: cannot open input file" >&2; exit 3 ;;
  *) echo "top : i/o = 8/ 8  lat = 0  nd = 80  edge = 240  lev = 8" ;;
esac
"#;

fn install_fake_abc(dir: &Path) -> PathBuf {
    let path = dir.join("fake-abc");
    fs::write(&path, FAKE_ABC).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

// One test per binary: spawning while another thread holds a write handle
// on the script can fail with ETXTBSY.
#[test]
fn test_search_and_evaluate_against_fake_tool() {
    let dir = tempfile::tempdir().unwrap();
    let abc = install_fake_abc(dir.path());
    let logs = dir.path().join("logs");
    let results = dir.path().join("out").join("final_result.csv");
    let convergence = dir.path().join("out").join("convergence.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_synthforge"))
        .args(["search", "--design", "designs/top.blif"])
        .args(["--particles", "4", "--dimensions", "8", "--iterations", "3", "-S", "7"])
        .arg("--abc-binary")
        .arg(&abc)
        .arg("--log-dir")
        .arg(&logs)
        .arg("--results-csv")
        .arg(&results)
        .arg("--convergence-csv")
        .arg(&convergence)
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let final_csv = fs::read_to_string(&results).unwrap();
    assert!(final_csv.starts_with("Metric,Value\n"));
    assert!(final_csv.contains("Best Score (QoR),1.6"));
    assert!(final_csv.contains("Bit Index,Bit Value"));

    let conv = fs::read_to_string(&convergence).unwrap();
    assert_eq!(conv.lines().count(), 4);
    assert!(conv.starts_with("iteration,best_score\n1,"));

    let cache_path = logs.join("qor_cache_top.json");
    let cache: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&cache_path).unwrap()).unwrap();
    assert!(!cache.as_object().unwrap().is_empty());

    let evaluate = |design: &str| {
        Command::new(env!("CARGO_BIN_EXE_synthforge"))
            .args(["evaluate", "--design", design, "--bits", "00000000"])
            .arg("--abc-binary")
            .arg(&abc)
            .arg("--log-dir")
            .arg(&logs)
            .output()
            .expect("Failed to execute binary")
    };

    let output = evaluate("designs/top.blif");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("1.600000"));

    // A failing tool run is reported, not fatal.
    let output = evaluate("designs/broken.blif");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("exit status: 3"));
    assert!(!logs.join("qor_cache_broken.json").exists());
}
