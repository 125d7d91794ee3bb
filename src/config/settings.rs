//! Bot settings loading from config.toml
//!
//! Every field has a default, so a missing file or a partial file is fine. Only a file
//! that exists but cannot be read or parsed is an error.

use crate::{
    core::{connect_four::session::DEFAULT_MOVE_TIMEOUT, paginator::PaginatorKind},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// Environment variable that overrides the settings file location
pub const CONFIG_PATH_VAR: &str = "BOT_CONFIG";
/// Settings file used when `BOT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Structure of the whole config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// General bot options
    pub bot: BotSettings,
    /// Connect Four options
    pub connect_four: ConnectFourSettings,
    /// Paginator options
    pub paginator: PaginatorSettings,
}

/// General bot options
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BotSettings {
    /// Prefix for text commands
    pub prefix: String,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
        }
    }
}

/// Connect Four options
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConnectFourSettings {
    /// Seconds a player has to make a move
    pub move_timeout_secs: u64,
}

impl Default for ConnectFourSettings {
    fn default() -> Self {
        Self {
            move_timeout_secs: DEFAULT_MOVE_TIMEOUT.as_secs(),
        }
    }
}

impl ConnectFourSettings {
    /// Move timeout as a `Duration`
    #[must_use]
    pub const fn move_timeout(&self) -> Duration {
        Duration::from_secs(self.move_timeout_secs)
    }
}

/// Paginator options
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginatorSettings {
    /// Inactivity window for embed listings
    pub timeout_secs: u64,
    /// Inactivity window for command output pages
    pub output_timeout_secs: u64,
}

impl Default for PaginatorSettings {
    fn default() -> Self {
        Self {
            timeout_secs: PaginatorKind::Embeds.default_timeout().as_secs(),
            output_timeout_secs: PaginatorKind::CommandOutput.default_timeout().as_secs(),
        }
    }
}

impl PaginatorSettings {
    /// Inactivity window for the given paginator flavour
    #[must_use]
    pub const fn timeout(&self, kind: PaginatorKind) -> Duration {
        match kind {
            PaginatorKind::Embeds => Duration::from_secs(self.timeout_secs),
            PaginatorKind::CommandOutput => Duration::from_secs(self.output_timeout_secs),
        }
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file, falling back to defaults when it does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No settings file at {:?}, using defaults", path);
        return Ok(Settings::default());
    }

    debug!("Loading settings from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;
    parse_settings(&contents)
}

/// Loads settings from `$BOT_CONFIG`, or ./config.toml when unset.
pub fn load_default_settings() -> Result<Settings> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_settings(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [bot]
            prefix = "?"

            [connect_four]
            move_timeout_secs = 90

            [paginator]
            timeout_secs = 120
            output_timeout_secs = 600
        "#;

        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.bot.prefix, "?");
        assert_eq!(settings.connect_four.move_timeout(), Duration::from_secs(90));
        assert_eq!(
            settings.paginator.timeout(PaginatorKind::Embeds),
            Duration::from_secs(120)
        );
        assert_eq!(
            settings.paginator.timeout(PaginatorKind::CommandOutput),
            Duration::from_secs(600)
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = parse_settings("[paginator]\ntimeout_secs = 30\n").unwrap();
        assert_eq!(settings.bot.prefix, "!");
        assert_eq!(settings.connect_four.move_timeout(), Duration::from_secs(60));
        assert_eq!(
            settings.paginator.timeout(PaginatorKind::Embeds),
            Duration::from_secs(30)
        );
        assert_eq!(
            settings.paginator.timeout(PaginatorKind::CommandOutput),
            Duration::from_secs(300)
        );
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_settings() {
        let result = parse_settings("[connect_four]\nmove_timeout_secs = \"soon\"\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = load_settings("definitely/not/here/config.toml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("cog_buddy_settings_{}.toml", std::process::id()));
        std::fs::write(&path, "[connect_four]\nmove_timeout_secs = 15\n").unwrap();

        let settings = load_settings(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.connect_four.move_timeout_secs, 15);
    }
}
