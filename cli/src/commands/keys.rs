//! # EvBot Keys Command
//!
//! File: cli/src/commands/keys.rs
//! Author: Christi Mahu
//!
//! Prints every registered message key with the number of handlers behind it,
//! in registration order. Configured `[[replies]]` are included.
//!
use crate::bot::{self, Dispatcher};
use crate::core::config::Config;
use crate::core::error::{EvbotError, Result};
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser, Debug)]
pub struct KeysArgs {}

pub fn handle_keys(_args: KeysArgs, config: &Config) -> Result<()> {
    let bot = bot::chatbot(io::sink(), config);
    let mut stdout = io::stdout().lock();
    write_keys(&bot, &mut stdout)?;
    stdout.flush().map_err(EvbotError::from)?;
    Ok(())
}

/// One line per key: `<key>: <n> handler(s)`.
pub fn write_keys<W: Write, O: Write>(bot: &Dispatcher<W>, out: &mut O) -> Result<()> {
    for key in bot.keys() {
        let count = bot.handler_count(key);
        let noun = if count == 1 { "handler" } else { "handlers" };
        writeln!(out, "{}: {} {}", key, count, noun).map_err(EvbotError::from)?;
    }
    Ok(())
}
