//! Discord credentials and command registration options from environment variables.
//!
//! The token is read right before the client starts and is never stored in
//! [`Settings`](crate::config::Settings).

use crate::errors::{Error, Result};
use tracing::warn;

/// Variable holding the bot token
pub const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
/// Variable holding a guild to register commands in instead of globally
pub const DEV_GUILD_VAR: &str = "DEV_GUILD_ID";

/// Reads the bot token.
///
/// # Errors
/// Returns an error if `DISCORD_BOT_TOKEN` is unset or not valid unicode.
pub fn bot_token() -> Result<String> {
    std::env::var(TOKEN_VAR).map_err(Error::EnvVar)
}

/// Guild for fast command registration during development, if configured.
#[must_use]
pub fn dev_guild_id() -> Option<u64> {
    let raw = std::env::var(DEV_GUILD_VAR).ok()?;
    parse_guild_id(&raw)
}

fn parse_guild_id(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            warn!("Ignoring invalid {}: {:?}", DEV_GUILD_VAR, raw);
            None
        }
    }
}
