//! Bot layer - Discord-specific interface, commands and interactive views
//!
//! Commands translate Discord invocations into calls on the [`core`](crate::core) state
//! machines, and views turn those state machines into messages with buttons that stay
//! live until they finish or time out.

/// Discord command implementations (games, general, random)
pub mod commands;
/// Framework setup, error reporting and client startup
pub mod framework;
/// Interactive message views (Connect Four board, paginators)
pub mod views;

use crate::{config::Settings, errors::Error};

/// Shared data available to all bot commands.
#[derive(Debug, Clone)]
pub struct BotData {
    /// Settings loaded at startup
    pub settings: Settings,
}

impl BotData {
    /// Creates a new `BotData` instance from the loaded settings.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

/// Poise context used by every command and view
pub type Context<'a> = poise::Context<'a, BotData, Error>;

pub use commands::*;
pub use framework::run_bot;
