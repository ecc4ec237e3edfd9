//! # EvBot Chatbot
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An event-driven chatbot: callbacks are registered against literal message
//! keys and run when a matching message is dispatched.
//!
//! - [`Dispatcher`]: the key-to-handlers registry, birth time and output sink
//! - [`Context`]: what a handler can see while it runs
//! - [`responders`]: the built-in handlers
//!
//! [`chatbot`] builds a dispatcher with the built-in handlers already
//! registered:
//!
//! | key    | handlers                                   |
//! |--------|--------------------------------------------|
//! | `hi`   | greeting                                   |
//! | `bye`  | farewell                                   |
//! | `age?` | whole seconds, then seconds + microseconds |
//!
//! Extra `[[replies]]` from the configuration are appended afterwards, so a
//! configured reply for `hi` runs after the greeting.
//!
//! ## Example
//!
//! ```
//! use evbot::bot;
//! use evbot::core::config::Config;
//!
//! let mut bot = bot::chatbot(Vec::new(), &Config::default());
//! bot.dispatch("hi").unwrap();
//! bot.dispatch("what?").unwrap();
//!
//! let out = String::from_utf8(bot.into_output()).unwrap();
//! assert_eq!(out, "Hello!\nsorry, I don't understand what?\n");
//! ```
//!
use std::io::Write;
use std::time::Instant;

use tracing::debug;

use crate::core::config::Config;

mod context;
mod dispatcher;
pub mod responders;

pub use context::Context;
pub use dispatcher::{Dispatcher, Handler};

use responders::{AGE_KEY, DEPARTURE_KEY, GREETING_KEY};

/// Build a chatbot writing to `out`, born now.
pub fn chatbot<W: Write>(out: W, config: &Config) -> Dispatcher<W> {
    chatbot_born_at(out, config, Instant::now())
}

/// Build a chatbot with an explicit birth time.
pub fn chatbot_born_at<W: Write>(out: W, config: &Config, born: Instant) -> Dispatcher<W> {
    let mut bot = Dispatcher::born_at(out, born);

    bot.register(
        GREETING_KEY,
        responders::fixed_reply(config.responses.greeting.clone()),
    );
    bot.register(
        DEPARTURE_KEY,
        responders::fixed_reply(config.responses.farewell.clone()),
    );
    bot.register(AGE_KEY, responders::age_in_seconds);
    bot.register(AGE_KEY, responders::age_detailed);

    for reply in &config.replies {
        bot.register(reply.key.clone(), responders::fixed_reply(reply.text.clone()));
    }

    debug!(
        keys = bot.keys().count(),
        extra_replies = config.replies.len(),
        "Chatbot constructed"
    );
    bot
}
