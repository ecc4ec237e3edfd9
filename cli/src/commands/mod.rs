//! # EvBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `evbot` CLI. Each command
//! defines its own arguments structure and a `handle_*` function that receives
//! the parsed arguments and the loaded configuration.
//!
//! ## Command Groups
//!
//! - `demo`: Replays the classic scripted conversation
//! - `chat`: Interactive line-by-line session over stdin
//! - `send`: Dispatches the messages given on the command line
//! - `keys`: Lists registered message keys
//!

/// Scripted conversation: `hi`, a pause, `age?`, `bye`.
pub mod demo;
/// Interactive session reading one message per line.
pub mod chat;
/// One-shot dispatch of command-line messages.
pub mod send;
/// Lists registered keys and their handler counts.
pub mod keys;
