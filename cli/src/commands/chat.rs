//! # EvBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An interactive session: every line read from stdin is dispatched as a
//! message. Only the line terminator is stripped, so keys still match exactly
//! (`Hi` and `hi ` are not `hi`). Blank lines are ignored.
//!
//! The session ends at end of input, or right after the configured exit key
//! (`bye` by default) has been dispatched, so the farewell is still printed.
//!
//! ```bash
//! evbot chat
//! printf 'hi\nage?\nbye\n' | evbot chat
//! ```
//!
use crate::bot::{self, Dispatcher};
use crate::core::config::{ChatConfig, Config};
use crate::core::error::{EvbotError, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Do not print the input prompt (useful when piping input).
    #[arg(long)]
    pub no_prompt: bool,
}

pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Starting chat session (exit key: {:?})", config.chat.exit_key);
    let mut bot = bot::chatbot(io::stdout().lock(), config);
    let prompt = if args.no_prompt {
        None
    } else {
        Some(config.chat.prompt.as_str())
    };
    let handled = run_chat(&mut bot, io::stdin().lock(), &config.chat, prompt)?;
    info!("Chat session ended after {} message(s)", handled);
    Ok(())
}

/// Reads messages from `input` until EOF or the exit key. Returns how many
/// messages were dispatched.
pub fn run_chat<W: Write, R: BufRead>(
    bot: &mut Dispatcher<W>,
    input: R,
    chat: &ChatConfig,
    prompt: Option<&str>,
) -> Result<usize> {
    let mut lines = input.lines();
    let mut handled = 0;

    loop {
        if let Some(prompt) = prompt {
            let out = bot.output_mut();
            write!(out, "{}", prompt).map_err(EvbotError::from)?;
            out.flush().map_err(EvbotError::from)?;
        }

        let line = match lines.next() {
            Some(line) => line.map_err(|e| EvbotError::Input(e.to_string()))?,
            None => {
                debug!("End of input");
                break;
            }
        };
        // `lines()` drops "\n"; a trailing "\r" from CRLF input is terminator too.
        let message = line.strip_suffix('\r').unwrap_or(&line);
        if message.trim().is_empty() {
            continue;
        }

        bot.dispatch(message)?;
        handled += 1;

        if message == chat.exit_key {
            debug!("Exit key received");
            break;
        }
    }

    bot.output_mut().flush().map_err(EvbotError::from)?;
    Ok(handled)
}
