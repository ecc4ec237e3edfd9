//! # EvBot Send Command
//!
//! File: cli/src/commands/send.rs
//! Author: Christi Mahu
//!
//! Dispatches each message given on the command line, in order.
//!
//! ```bash
//! evbot send hi 'age?' bye
//! ```
//!
use crate::bot;
use crate::core::config::Config;
use crate::core::error::{EvbotError, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Messages to dispatch. Each one must match a key exactly.
    #[arg(required = true)]
    pub messages: Vec<String>,
}

pub fn handle_send(args: SendArgs, config: &Config) -> Result<()> {
    info!("Sending {} message(s)", args.messages.len());
    let mut bot = bot::chatbot(io::stdout().lock(), config);
    for message in &args.messages {
        bot.dispatch(message)?;
    }
    bot.output_mut().flush().map_err(EvbotError::from)?;
    Ok(())
}
