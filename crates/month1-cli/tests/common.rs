//! Shared helpers for the CLI integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment: a config path inside a temp dir, so the developer's
/// own config never leaks into a test run.
pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("month1").join("config.toml");

        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.config_path.parent().unwrap()).expect("Failed to create dir");
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("month1").expect("Failed to find month1 binary");
        cmd.env("MONTH1_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");
        cmd
    }
}
