use std::fs;
use std::process::Command;

fn synthforge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_synthforge"))
}

#[test]
fn test_dry_run_prints_decoded_script() {
    let output = synthforge()
        .args(["evaluate", "--dry-run", "--bits", "00000001", "--design", "d/adder.blif"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("read_blif d/adder.blif; strash; rewrite; rewrite -z; if -K 6; print_stats;"),
        "stdout was: {}",
        stdout
    );
}

#[test]
fn test_dry_run_mapped_vocabulary() {
    let output = synthforge()
        .args(["evaluate", "--dry-run", "--vocabulary", "mapped", "--bits", "1111"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("&get; &mfs; if -v -K 6; print_stats;"));
}

#[test]
fn test_malformed_bits_fail() {
    let output = synthforge()
        .args(["evaluate", "--dry-run", "--bits", "0102"])
        .output()
        .expect("Failed to execute binary");
    assert!(!output.status.success());
}

#[test]
fn test_invalid_dimensions_rejected_before_search() {
    let dir = tempfile::tempdir().unwrap();
    let output = synthforge()
        .args(["search", "--dimensions", "6", "--abc-binary", "synthforge-no-such-tool"])
        .arg("--log-dir")
        .arg(dir.path())
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_cli_flag_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("run.json");
    fs::write(&cfg, r#"{ "oracle": { "vocabulary": "mapped", "design": "x/top.blif" } }"#).unwrap();

    let output = synthforge()
        .arg("--config")
        .arg(&cfg)
        .args(["evaluate", "--dry-run", "--bits", "0000", "--vocabulary", "generic"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Design from the file, vocabulary from the command line.
    assert!(stdout.contains("read_blif x/top.blif; strash; rewrite; if -K 6; print_stats;"));
}
