//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment for running the binary:
//! - A temporary working directory for input files
//! - A separate, empty user configuration directory
//! - A scrubbed `SRCGATE_*` environment

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const SRCGATE_VARS: [&str; 7] = [
    "SRCGATE_BASE_PATH",
    "SRCGATE_IGNORE_MISSING",
    "SRCGATE_MODE",
    "SRCGATE_OUTPUT_FORMAT",
    "SRCGATE_REMAPPINGS",
    "SRCGATE_LOG_MODE",
    "SRCGATE_CONFIG_DIR",
];

/// Test environment with an isolated working and configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the working directory
    pub work_dir: PathBuf,
    /// Path of the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dunce::canonicalize(temp_dir.path()).expect("Failed to canonicalize");
        let work_dir = root.join("work");
        let config_dir = root.join("user-config");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            work_dir,
            config_dir,
        }
    }

    /// Get a command builder running in the working directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("srcgate").expect("Failed to find srcgate binary");
        for var in SRCGATE_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir)
            .arg("--config-dir")
            .arg(&self.config_dir);
        cmd
    }

    /// Write a file relative to the working directory.
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create a directory relative to the working directory.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// The working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }
}
