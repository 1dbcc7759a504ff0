//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a temporary directory and the
//! RPATH_* variables cleared, so the developer's own configuration never
//! leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RPATH_ENV_VARS: [&str; 7] = [
    "RPATH_CONFIG",
    "RPATH_LOG_MODE",
    "RPATH_REJECT_CONTROL_CHARS",
    "RPATH_MAX_PATH_LENGTH",
    "RPATH_MAX_SEGMENT_LENGTH",
    "RPATH_REQUIRE_ABSOLUTE",
    "RPATH_OUTPUT_FORMAT",
];

/// Isolated environment for running the `rpath` binary.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Stand-in home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty home directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder for the `rpath` binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rpath").expect("Failed to find rpath binary");
        cmd.env("HOME", &self.home);
        for var in RPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write the user configuration file (`~/.rpath/config.yaml`).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".rpath");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Write a configuration file at `name` under the temp directory.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.home
    }

    /// Run `rpath` with `args` and return stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run rpath");

        assert!(
            output.status.success(),
            "rpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
