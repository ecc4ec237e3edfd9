//! # EvBot
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! A tiny event-driven chatbot. Handlers are registered against literal
//! message keys; dispatching a key runs its handlers in registration order.
//!
//! The library is shared by the `evbot` binary (`main.rs`) and the
//! integration tests in `tests/`.
//!
pub mod bot;
pub mod commands;
pub mod core;
