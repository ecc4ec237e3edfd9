//! # EvBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the EvBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the layered configuration
//! - Routing execution to the appropriate command handler
//!
//! Bot replies go to stdout; logs go to stderr.
//!
//! ## Examples
//!
//! ```bash
//! # Replay the scripted conversation
//! evbot demo
//!
//! # Talk to the bot with debug logging
//! evbot -vv chat
//!
//! # Use an explicit configuration file
//! evbot --config ./my-bot.toml send hi ping
//! ```
//!
use clap::{Parser, Subcommand};
use evbot::{commands, core::config};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "evbot",
    about = "EvBot: a tiny event-driven chatbot",
    long_about = "Registers callbacks against literal messages and runs them when a matching \
                  message arrives. Try `evbot demo` or `evbot chat`.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file applied on top of the user and project configuration.
    #[arg(long, global = true, env = "EVBOT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay the scripted conversation (hi, pause, age?, bye).
    Demo(commands::demo::DemoArgs),
    /// Chat interactively, one message per line.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Dispatch the given messages in order.
    #[command(alias = "s")]
    Send(commands::send::SendArgs),
    /// List registered message keys.
    Keys(commands::keys::KeysArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = config::load_config(cli.config.as_deref()).and_then(|cfg| {
        match cli.command {
            Commands::Demo(args) => commands::demo::handle_demo(args, &cfg),
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
            Commands::Send(args) => commands::send::handle_send(args, &cfg),
            Commands::Keys(args) => commands::keys::handle_keys(args, &cfg),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
