//! # Test Harness
//!
//! Provides utilities for integration testing ulidgen without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use ulidgen::set_home_override;

/// Global lock to ensure tests touching the process-wide sequencer or the
/// home override run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary "home" directory for the global config.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/ulidgen/config)
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path of the temporary home directory.
    pub fn home_path(&self) -> &Path {
        self.home_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("ulidgen")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Creates a `ulid` command whose HOME points at the test home.
    pub fn ulid_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ulid").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("ULIDGEN_LOG");
        cmd.env_remove("ULIDGEN_LOG_JSON");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations.
#[derive(Default)]
pub struct GlobalConfigBuilder {
    case_mode: Option<String>,
    output: Option<String>,
    max_count: Option<usize>,
    log_level: Option<String>,
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_mode(mut self, mode: impl Into<String>) -> Self {
        self.case_mode = Some(mode.into());
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(mode) = &self.case_mode {
            lines.push(format!("case_mode = \"{mode}\""));
        }
        if let Some(output) = &self.output {
            lines.push(format!("output = \"{output}\""));
        }
        if let Some(max_count) = self.max_count {
            lines.push(format!("max_count = {max_count}"));
        }
        if let Some(level) = &self.log_level {
            lines.push(format!("log_level = \"{level}\""));
        }
        lines.join("\n")
    }
}
