//! Test harness for scssdoc integration tests

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

pub fn run_scssdoc(dir: &Path, args: &[&str]) -> (String, String, bool) {
    run_scssdoc_with_stdin(dir, args, "")
}

pub fn run_scssdoc_with_stdin(dir: &Path, args: &[&str], input: &str) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_scssdoc");
    let mut child = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("NO_COLOR")
        .env_remove("FORCE_COLOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run scssdoc");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for scssdoc");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Run with `--json` and parse stdout.
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full_args = vec!["--json"];
    full_args.extend_from_slice(args);
    let (stdout, stderr, success) = run_scssdoc(dir, &full_args);
    assert!(success, "scssdoc should succeed: {}", stderr);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let project = TestProject::new();
        assert!(project.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let project = TestProject::new();
        let file_path = project.add_file("styles/_vars.scss", "$a: 1;");
        assert!(file_path.exists());
    }
}
