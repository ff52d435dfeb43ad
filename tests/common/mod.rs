//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// A workr command wired to an isolated config directory
pub fn workr(config: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("workr"));
    cmd.env("WORKR_CONFIG_DIR", config.path());
    cmd
}

/// Fresh config directory per test
pub fn setup_config() -> TempDir {
    TempDir::new().unwrap()
}

/// Persist a role so role-gated commands run
pub fn select_role(config: &TempDir, role: &str) {
    workr(config)
        .args(["role", "set", role])
        .assert()
        .success();
}

/// Catalog list with the simulated delay turned off
pub fn list(config: &TempDir, extra: &[&str]) -> Command {
    let mut cmd = workr(config);
    cmd.args(["catalog", "list", "--latency-ms", "0"]);
    cmd.args(extra);
    cmd
}
