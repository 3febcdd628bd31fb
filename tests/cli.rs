use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_device-label"))
}

fn output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("device-label-cli-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create output directory");
    dir
}

#[test]
fn test_writes_one_file_per_address() {
    let dir = output_dir("basic");

    let output = cargo_bin()
        .args(["00:11:22:33:44:55", "66:77:88:99:aa:bb", "-o"])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("Written 00:11:22:33:44:55 to"));

    for name in ["001122334455.pdf", "66778899aabb.pdf"] {
        let metadata = fs::metadata(dir.join(name)).expect("PDF file was not created");
        assert!(metadata.len() > 500, "PDF file is too small");
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_oversized_margins_fail() {
    let dir = output_dir("margins");

    let output = cargo_bin()
        .args(["00:11:22:33:44:55", "--page-size", "50x50", "-o"])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid label geometry"));
    assert!(!dir.join("001122334455.pdf").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_negative_barcode_height_fails() {
    let dir = output_dir("barcode-height");

    let output = cargo_bin()
        .args(["00:11:22:33:44:55", "--barcode-height=-10", "-o"])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("barcode band height"));
    assert!(!dir.join("001122334455.pdf").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_bad_url_template_is_rejected() {
    let output = cargo_bin()
        .args(["00:11:22:33:44:55", "--url-template", "http://example.org/"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("placeholder"));
}

#[cfg(unix)]
#[test]
fn test_merge_reports_one_line() {
    let dir = output_dir("merge");

    let output = cargo_bin()
        .args(["00:11:22:33:44:55", "--merge-tool", "true", "--merge"])
        .arg(dir.join("all.pdf"))
        .arg("-o")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().last().unwrap().starts_with("Merged 1 files into"));

    fs::remove_dir_all(&dir).ok();
}
