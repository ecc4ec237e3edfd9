//! # EvBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get EvBot Command (`evbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `evbot` binary.
///
/// The command runs inside `workdir` with `EVBOT_CONFIG` and `RUST_LOG`
/// cleared and `XDG_CONFIG_HOME` pointed into `workdir`, so a stray config
/// file or log filter from the developer's environment cannot change the
/// output under test.
///
/// ## Panics
/// Panics if the `evbot` binary cannot be found via `Command::cargo_bin`.
pub fn evbot_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("evbot").expect("Failed to find evbot binary for testing");
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir.join("xdg"))
        .env_remove("EVBOT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates an isolated working directory. The `.git` marker stops the
/// project-config search from walking above it.
pub fn isolated_workdir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}
