//! # EvBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout EvBot.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `EvbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! An unrecognized message key is deliberately absent from `EvbotError`: the
//! dispatcher answers it with a notice line instead of failing. Errors raised
//! by a handler travel through `Dispatcher::dispatch` untouched, so a caller can
//! still `downcast_ref::<EvbotError>()` on them.
//!
//! ## Examples
//!
//! ```rust
//! use evbot::core::error::{EvbotError, Result};
//!
//! fn check_key(key: &str) -> Result<()> {
//!     if key.is_empty() {
//!         return Err(EvbotError::Config("reply key cannot be empty".into()).into());
//!     }
//!     Ok(())
//! }
//! assert!(check_key("").is_err());
//! ```
//!
use thiserror::Error;

/// Custom error type for the EvBot application.
#[derive(Error, Debug)]
pub enum EvbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Handler for '{key}' failed: {reason}")]
    Handler { key: String, reason: String },

    #[error("Failed to write bot output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Input(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
