/// Bot credentials and registration options from environment variables
pub mod discord;

/// Timeouts and bot options loaded from config.toml
pub mod settings;

pub use settings::{Settings, load_default_settings, load_settings};
