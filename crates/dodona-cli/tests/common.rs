#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment: every run points `--config` into a temp dir so the
/// user's own config file never leaks into a test.
pub struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dodona").expect("Failed to find dodona binary");
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--no-color")
            .env_remove("DODONA_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Runs with `--format json` and parses stdout.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(["--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run dodona");
        assert!(
            output.status.success(),
            "dodona {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
