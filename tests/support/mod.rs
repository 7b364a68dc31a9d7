//! Test support utilities for keepath integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Each test gets its own project dir holding a `keepath.toml` with a low
/// scrypt work factor. No process-global state is mutated: child processes
/// use `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new environment without a database.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join("keepath.toml"), TEST_CONFIG)
            .expect("failed to write keepath.toml");
        Self { dir }
    }

    /// Create a test environment with an initialized database.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize database: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with secrets written at the given paths.
    pub fn with_secrets(secrets: &[(&str, &str, &str)]) -> Self {
        let t = Self::init();
        for (path, user, pass) in secrets {
            let output = t.set(path, &["--username", user, "--password", pass]);
            assert!(
                output.status.success(),
                "Failed to set secret {}: {}",
                path,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the database file.
    pub fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join(TEST_DATABASE)
    }
}
