//! Message dispatcher.
//!
//! The dispatcher maps exact message keys to an ordered list of handlers.
//! Registration is append-only: a second handler under an existing key runs
//! after the first one, and nothing is ever removed or de-duplicated.
//!
//! # Example
//!
//! ```
//! use evbot::bot::Dispatcher;
//!
//! let mut bot = Dispatcher::new(Vec::new());
//! bot.register("ping", |ctx| ctx.say("pong"));
//! bot.dispatch("ping").unwrap();
//! bot.dispatch("pong").unwrap();
//!
//! let out = String::from_utf8(bot.into_output()).unwrap();
//! assert_eq!(out, "pong\nsorry, I don't understand pong\n");
//! ```

use std::collections::HashMap;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use super::Context;
use crate::core::error::{EvbotError, Result};

/// A registered callback. Handlers run synchronously and may fail; the first
/// failure is returned from [`Dispatcher::dispatch`] unchanged.
pub type Handler = Box<dyn FnMut(&mut Context<'_>) -> Result<()>>;

/// Registry of handlers keyed by exact message text, plus the bot's birth time
/// and output sink.
pub struct Dispatcher<W: Write> {
    /// Handlers by key. Every entry holds at least one handler.
    handlers: HashMap<String, Vec<Handler>>,
    /// Keys in first-registration order (for listing).
    order: Vec<String>,
    /// Captured once at construction.
    born: Instant,
    out: W,
}

impl<W: Write> Dispatcher<W> {
    /// Create an empty dispatcher writing to `out`, born now.
    pub fn new(out: W) -> Self {
        Self::born_at(out, Instant::now())
    }

    /// Create an empty dispatcher with an explicit birth time.
    pub fn born_at(out: W, born: Instant) -> Self {
        Self {
            handlers: HashMap::new(),
            order: Vec::new(),
            born,
            out,
        }
    }

    /// Append `handler` to the handlers registered under `key`.
    pub fn register<F>(&mut self, key: impl Into<String>, handler: F)
    where
        F: FnMut(&mut Context<'_>) -> Result<()> + 'static,
    {
        let key = key.into();
        match self.handlers.get_mut(&key) {
            Some(list) => {
                list.push(Box::new(handler));
                debug!(key = %key, position = list.len(), "Appended handler");
            }
            None => {
                debug!(key = %key, "Registered first handler");
                self.order.push(key.clone());
                self.handlers.insert(key, vec![Box::new(handler)]);
            }
        }
    }

    /// Run every handler registered under `key`, in registration order.
    ///
    /// An unknown key writes a single "not understood" notice and succeeds.
    /// A failing handler stops the dispatch and its error is returned as is.
    pub fn dispatch(&mut self, key: &str) -> Result<()> {
        let handlers = match self.handlers.get_mut(key) {
            Some(handlers) => handlers,
            None => {
                info!(key = %key, "Unrecognized message");
                writeln!(self.out, "sorry, I don't understand {}", key)
                    .map_err(EvbotError::from)?;
                return Ok(());
            }
        };

        debug!(key = %key, handlers = handlers.len(), "Dispatching message");
        let mut ctx = Context::new(key, &mut self.out, self.born);
        for (index, handler) in handlers.iter_mut().enumerate() {
            trace!(key = %key, index, "Invoking handler");
            handler(&mut ctx)?;
        }
        Ok(())
    }

    /// Whether any handler is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of handlers registered under `key` (0 when unknown).
    pub fn handler_count(&self, key: &str) -> usize {
        self.handlers.get(key).map_or(0, Vec::len)
    }

    /// Registered keys, in the order they were first registered.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Time elapsed since construction.
    pub fn age(&self) -> Duration {
        self.born.elapsed()
    }

    /// Mutable access to the output sink, e.g. for prompts or flushing.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the dispatcher and hand back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
