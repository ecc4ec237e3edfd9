//! # EvBot CLI Send Integration Tests
//!
//! File: cli/tests/send.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `evbot send` dispatches its arguments in order; unknown messages produce a
//! notice but do not fail the command.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_send_greeting_only() {
    let dir = isolated_workdir();
    evbot_cmd(dir.path())
        .args(["send", "hi"])
        .assert()
        .success()
        .stdout("Hello!\n");
}

#[test]
fn test_send_unknown_message() {
    let dir = isolated_workdir();
    evbot_cmd(dir.path())
        .args(["send", "what?"])
        .assert()
        .success()
        .stdout("sorry, I don't understand what?\n");
}

#[test]
fn test_send_preserves_order() {
    let dir = isolated_workdir();
    evbot_cmd(dir.path())
        .args(["send", "bye", "HI", "hi"])
        .assert()
        .success()
        .stdout("Nice chatting with you!\nsorry, I don't understand HI\nHello!\n");
}

#[test]
fn test_send_configured_reply_via_env() {
    let dir = isolated_workdir();
    let config_path = dir.path().join("replies.toml");
    fs::write(
        &config_path,
        "[[replies]]\nkey = \"ping\"\ntext = \"pong\"\n\n[[replies]]\nkey = \"hi\"\ntext = \"Nice to meet you.\"\n",
    )
    .unwrap();

    evbot_cmd(dir.path())
        .env("EVBOT_CONFIG", &config_path)
        .args(["send", "ping", "hi"])
        .assert()
        .success()
        .stdout("pong\nHello!\nNice to meet you.\n");
}

#[test]
fn test_send_invalid_config_fails() {
    let dir = isolated_workdir();
    fs::write(dir.path().join(".evbot.toml"), "[responses]\ngreeting = \"\"\n").unwrap();

    evbot_cmd(dir.path())
        .args(["send", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("responses.greeting cannot be empty"));
}

#[test]
fn test_send_unknown_config_field_fails() {
    let dir = isolated_workdir();
    fs::write(dir.path().join(".evbot.toml"), "volume = 11\n").unwrap();

    evbot_cmd(dir.path())
        .args(["send", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}
