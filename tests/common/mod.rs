//! Shared testing utilities for penh CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "sk-test-cli";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `penh` binary without a credential.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("penh").expect("Failed to locate penh binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Build a command carrying the test credential.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("OPENAI_API_KEY", TEST_API_KEY);
        cmd
    }

    /// Write `penh.toml` in the work directory pointing the API at `base_url`.
    pub fn write_config(&self, base_url: &str) {
        let content = format!("[api]\nbase_url = \"{}/\"\ntimeout_secs = 5\n", base_url);
        fs::write(self.work_dir.join("penh.toml"), content).expect("Failed to write penh.toml");
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }
}

/// Chat-completion response body whose content is `content`.
#[allow(dead_code)]
pub fn chat_body(content: &str) -> String {
    serde_json::json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
        .to_string()
}
