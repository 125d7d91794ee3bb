//! Unified error type for cog-buddy.
//!
//! Player- and owner-facing rejections (wrong turn, full column, bad page number, ...)
//! live next to the infrastructure failures so every layer can use `?` with a single
//! `Result`. [`Error::is_user_facing`] separates the two groups for reporting.

use thiserror::Error;

/// All errors produced by the bot.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A game was requested against oneself or a bot account
    #[error("You cannot play against yourself or bots!")]
    InvalidOpponent,

    /// A participant acted while it was the other player's turn
    #[error("You cannot use this currently, it's <@{active}>'s turn.")]
    NotYourTurn {
        /// The player whose move it is
        active: u64,
    },

    /// Someone outside the game pressed a game control
    #[error("You are not a part of this game.")]
    NotAParticipant,

    /// Column index outside the board
    #[error("Column {column} does not exist.")]
    InvalidColumn {
        /// Zero-based column that was requested
        column: usize,
    },

    /// The selected column has no free cell left
    #[error("Column {} is full, pick another one.", .column + 1)]
    ColumnFull {
        /// Zero-based column that was requested
        column: usize,
    },

    /// The game already ended
    #[error("This game is already over.")]
    GameOver,

    /// Someone other than the owner pressed a paginator control
    #[error("This paginator belongs to <@{owner}>.")]
    NotOwner {
        /// Owner of the paginator
        owner: u64,
    },

    /// The paginator was stopped or timed out
    #[error("Took too long")]
    PaginatorClosed,

    /// A page number outside `1..=max` was requested
    #[error("Expected a number between 1 and {max}")]
    OutOfRange {
        /// Requested one-based page
        requested: usize,
        /// Number of pages
        max: usize,
    },

    /// The page number was not a positive integer
    #[error("Expected a number not {input:?}")]
    InvalidInput {
        /// Raw text the user entered
        input: String,
    },

    /// A paginator needs at least one page
    #[error("Nothing to show.")]
    NoPages,

    /// `choose` was called without choices
    #[error("Give me something to choose from.")]
    NothingToChoose,

    /// Unsupported number of die faces
    #[error("Invalid number of faces ({faces}) given.\nValid options are: {valid}")]
    InvalidDieFaces {
        /// Requested face count
        faces: u32,
        /// Space separated list of allowed face counts
        valid: String,
    },

    /// A single line does not fit on an empty text page
    #[error("Line of {length} characters exceeds the page limit of {max}")]
    LineTooLong {
        /// Length of the rejected line
        length: usize,
        /// Room available on an empty page
        max: usize,
    },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Formatting into a `String` failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

impl Error {
    /// True for rejections that should be shown to the acting user rather than logged
    /// as failures.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidOpponent
                | Self::NotYourTurn { .. }
                | Self::NotAParticipant
                | Self::InvalidColumn { .. }
                | Self::ColumnFull { .. }
                | Self::GameOver
                | Self::NotOwner { .. }
                | Self::PaginatorClosed
                | Self::OutOfRange { .. }
                | Self::InvalidInput { .. }
                | Self::NothingToChoose
                | Self::InvalidDieFaces { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
