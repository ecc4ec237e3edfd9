//! # EvBot Demo Command
//!
//! File: cli/src/commands/demo.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Replays the conversation the bot was written to show off:
//!
//! 1. `hi`
//! 2. a blocking pause (2.2 seconds unless configured otherwise)
//! 3. `age?`, which now reports a non-zero age
//! 4. `bye`
//!
//! ```bash
//! evbot demo
//! evbot demo --pause 0.5
//! ```
//!
use crate::bot::{self, responders, Dispatcher};
use crate::core::config::Config;
use crate::core::error::{EvbotError, Result};
use clap::Parser;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::info;

/// # Demo Command Arguments (`DemoArgs`)
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Seconds to wait between the greeting and the age query.
    /// Overrides `demo.pause_secs` from the configuration.
    #[arg(long, short, value_parser = parse_pause)]
    pub pause: Option<Duration>,
}

/// Accepts a non-negative number of seconds that fits in a `Duration`.
fn parse_pause(s: &str) -> std::result::Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("pause must be a non-negative number, got {}", s))
}

/// # Handle Demo Command (`handle_demo`)
///
/// Builds a chatbot on stdout and runs the scripted conversation.
pub fn handle_demo(args: DemoArgs, config: &Config) -> Result<()> {
    let pause = match args.pause {
        Some(pause) => pause,
        None => config.demo.pause()?,
    };
    info!("Running demo with a {:?} pause", pause);

    let mut bot = bot::chatbot(io::stdout().lock(), config);
    run_demo(&mut bot, pause)?;
    bot.output_mut().flush().map_err(EvbotError::from)?;
    Ok(())
}

/// Runs the scripted conversation against an existing bot.
pub fn run_demo<W: Write>(bot: &mut Dispatcher<W>, pause: Duration) -> Result<()> {
    bot.dispatch(responders::GREETING_KEY)?;
    bot.output_mut().flush().map_err(EvbotError::from)?;
    thread::sleep(pause);
    bot.dispatch(responders::AGE_KEY)?;
    bot.dispatch(responders::DEPARTURE_KEY)?;
    Ok(())
}
