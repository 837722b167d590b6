use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn fixtures_cmd() -> Command {
    Command::cargo_bin("deploy-fixtures").unwrap()
}

/// Runs `generate` against `root` and asserts success.
pub fn generate_into(root: &Path) {
    fixtures_cmd()
        .args(["--quiet", "generate", "--output"])
        .arg(root)
        .assert()
        .success();
}

pub fn read_text(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}
