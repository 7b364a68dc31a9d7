//! Command helper methods for Test.

use super::{Test, TEST_PASSWORD};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keepath command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - KEEPATH_PASSWORD set to the test master password
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("KEEPATH_PASSWORD", TEST_PASSWORD);
        cmd
    }

    /// A keepath command without any password in its environment.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keepath").expect("failed to find keepath binary");
        cmd.env_remove("KEEPATH_PASSWORD");
        cmd.env_remove("KEEPATH_DB");
        cmd.env_remove("KEEPATH_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `keepath init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run keepath init")
    }

    /// Shortcut for `keepath set <path> <extra...>`.
    pub fn set(&self, path: &str, extra: &[&str]) -> Output {
        self.cmd()
            .args(["set", path])
            .args(extra)
            .output()
            .expect("failed to run keepath set")
    }

    /// Shortcut for `keepath set <path> <extra...> --json`.
    pub fn set_json(&self, path: &str, extra: &[&str]) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["set", path, "--json"])
            .args(extra)
            .output()
            .expect("failed to run keepath set --json");
        super::assert_success(&output);
        super::json(&output)
    }

    /// Shortcut for `keepath get <path>`.
    pub fn get(&self, path: &str) -> Output {
        self.cmd()
            .args(["get", path])
            .output()
            .expect("failed to run keepath get")
    }

    /// Shortcut for `keepath get <path> --json`, parsed.
    pub fn get_json(&self, path: &str) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["get", path, "--json"])
            .output()
            .expect("failed to run keepath get --json");
        super::assert_success(&output);
        super::json(&output)
    }

    /// Shortcut for `keepath group <path>`.
    pub fn group(&self, path: &str) -> Output {
        self.cmd()
            .args(["group", path])
            .output()
            .expect("failed to run keepath group")
    }

    /// Shortcut for `keepath group <path> --json`, parsed.
    pub fn group_json(&self, path: &str) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["group", path, "--json"])
            .output()
            .expect("failed to run keepath group --json");
        super::assert_success(&output);
        super::json(&output)
    }
}
