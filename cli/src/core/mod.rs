//! # EvBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by the bot and the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use evbot::core::config; // For loading configuration
//! use evbot::core::error::{EvbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
