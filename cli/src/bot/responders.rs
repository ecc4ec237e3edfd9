//! Built-in responders.
//!
//! These are the handlers every EvBot starts with. The age responders read the
//! bot's birth time through the [`Context`]; the others just print a line.

use super::Context;
use crate::core::error::Result;

pub const GREETING_KEY: &str = "hi";
pub const DEPARTURE_KEY: &str = "bye";
pub const AGE_KEY: &str = "age?";

/// Handler that prints a fixed line. Used for the greeting, the farewell and
/// configured extra replies.
pub fn fixed_reply(text: String) -> impl FnMut(&mut Context<'_>) -> Result<()> {
    move |ctx| ctx.say(&text)
}

/// `I am <S> seconds old.`
pub fn age_in_seconds(ctx: &mut Context<'_>) -> Result<()> {
    let secs = ctx.age().as_secs();
    ctx.say(format!("I am {} seconds old.", secs))
}

/// `Technically, I'm <S> seconds and <U> microseconds old`
pub fn age_detailed(ctx: &mut Context<'_>) -> Result<()> {
    let age = ctx.age();
    ctx.say(format!(
        "Technically, I'm {} seconds and {} microseconds old",
        age.as_secs(),
        age.subsec_micros()
    ))
}
