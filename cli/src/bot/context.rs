//! Handler context.
//!
//! A handler receives a `Context` for the message being dispatched. It is the
//! handler's only window onto the bot: it can write a reply line and ask how
//! long the bot has been alive.

use std::fmt::Display;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::core::error::{EvbotError, Result};

/// Context passed to every handler invoked by a dispatch.
pub struct Context<'a> {
    key: &'a str,
    out: &'a mut dyn Write,
    born: Instant,
}

impl<'a> Context<'a> {
    pub(crate) fn new(key: &'a str, out: &'a mut dyn Write, born: Instant) -> Self {
        Self { key, out, born }
    }

    /// The message key that triggered this dispatch.
    #[inline]
    pub fn key(&self) -> &str {
        self.key
    }

    /// Time elapsed since the dispatcher was constructed.
    #[inline]
    pub fn age(&self) -> Duration {
        self.born.elapsed()
    }

    /// Write one line of bot output.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(EvbotError::from)?;
        Ok(())
    }
}
