//! Connect Four game session - turn order, move validation, timeout and results.
//!
//! A [`Session`] wraps a [`Board`] with the two players and a small state machine:
//!
//! ```text
//! AwaitingMove --valid move--> AwaitingMove (other player) | Won | Draw
//! AwaitingMove --no accepted move within the window--> TimedOut
//! ```
//!
//! `Won`, `Draw` and `TimedOut` are terminal. Every later move is rejected with
//! [`Error::GameOver`] and [`Session::expire`] becomes a no-op, so whichever of a move
//! or the inactivity timer changes the state first wins.

use super::board::{Board, COLUMN_GLYPHS, COLUMNS, Disc};
use crate::{
    core::actor::{Actor, ActorId},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tracing::debug;

/// Inactivity window used when the configuration does not override it.
pub const DEFAULT_MOVE_TIMEOUT: Duration = Duration::from_secs(60);

/// Which of the two seats is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The challenger, plays red and moves first
    One,
    /// The challenged player, plays yellow
    Two,
}

impl Slot {
    /// The opposite seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// A participant and the disc they play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Who is playing
    pub id: ActorId,
    /// Their marker
    pub disc: Disc,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the active player
    AwaitingMove,
    /// The player in this seat connected four
    Won(Slot),
    /// The board filled up without a winner
    Draw,
    /// The player in this seat did not move in time
    TimedOut(Slot),
}

impl GameState {
    /// True for `Won`, `Draw` and `TimedOut`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingMove)
    }
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on, `next` is up
    Continue {
        /// Player who moves next
        next: ActorId,
    },
    /// The mover won
    Won {
        /// Player who connected four
        winner: ActorId,
    },
    /// Board is full without a winner
    Draw,
}

/// One column button as it should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnControl {
    /// Zero-based column
    pub column: usize,
    /// Keycap glyph
    pub label: &'static str,
    /// Whether the button can be pressed
    pub disabled: bool,
}

/// The embed part of a game render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEmbed {
    /// Embed title
    pub title: &'static str,
    /// Players line, board, legend and status line
    pub description: String,
    /// When the game started
    pub started_at: DateTime<Utc>,
}

/// Everything the display collaborator needs to show the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRender {
    /// Message text above the embed
    pub content: Option<String>,
    /// Board embed, absent after a timeout
    pub embed: Option<GameEmbed>,
    /// Column buttons, empty once the game is over
    pub controls: Vec<ColumnControl>,
}

/// A two-player Connect Four game.
#[derive(Debug, Clone)]
pub struct Session {
    players: [Player; 2],
    board: Board,
    active: Slot,
    state: GameState,
    window: Duration,
    last_activity: Instant,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a game where `challenger` plays red and moves first.
    ///
    /// Fails with [`Error::InvalidOpponent`] for self-play or when either side is a bot.
    pub fn start(challenger: Actor, opponent: Actor, window: Duration, now: Instant) -> Result<Self> {
        if challenger.id == opponent.id || challenger.is_bot || opponent.is_bot {
            return Err(Error::InvalidOpponent);
        }

        Ok(Self {
            players: [
                Player {
                    id: challenger.id,
                    disc: Disc::Red,
                },
                Player {
                    id: opponent.id,
                    disc: Disc::Yellow,
                },
            ],
            board: Board::new(),
            active: Slot::One,
            state: GameState::AwaitingMove,
            window,
            last_activity: now,
            started_at: Utc::now(),
        })
    }

    /// Current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Player in the given seat.
    #[must_use]
    pub const fn player(&self, slot: Slot) -> Player {
        self.players[slot.index()]
    }

    /// Player whose turn it is (or was, once the game is over).
    #[must_use]
    pub const fn active_player(&self) -> Player {
        self.player(self.active)
    }

    /// True when `actor` is one of the two players.
    #[must_use]
    pub fn is_participant(&self, actor: ActorId) -> bool {
        self.players.iter().any(|player| player.id == actor)
    }

    /// Moment the session times out unless a move is accepted first.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.last_activity + self.window
    }

    /// Time left until [`Session::deadline`], zero once it has passed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }

    /// Plays `actor`'s disc into `column`.
    ///
    /// Rejections never change the session: a finished game gives
    /// [`Error::GameOver`], the waiting player [`Error::NotYourTurn`], outsiders
    /// [`Error::NotAParticipant`], and a bad or full column [`Error::InvalidColumn`] /
    /// [`Error::ColumnFull`].
    pub fn handle_move(&mut self, actor: ActorId, column: usize, now: Instant) -> Result<MoveOutcome> {
        if self.state.is_terminal() {
            return Err(Error::GameOver);
        }

        let mover = self.active_player();
        if actor != mover.id {
            return Err(if self.is_participant(actor) {
                Error::NotYourTurn { active: mover.id.0 }
            } else {
                Error::NotAParticipant
            });
        }

        if column >= COLUMNS {
            return Err(Error::InvalidColumn { column });
        }

        let Some(row) = self.board.place(column, mover.disc) else {
            return Err(Error::ColumnFull { column });
        };
        self.last_activity = now;
        debug!(player = %mover.id, column, row, "Disc placed");

        if self.board.is_win(mover.disc) {
            self.state = GameState::Won(self.active);
            return Ok(MoveOutcome::Won { winner: mover.id });
        }

        if self.board.is_full() {
            self.state = GameState::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.active = self.active.other();
        Ok(MoveOutcome::Continue {
            next: self.active_player().id,
        })
    }

    /// Ends the game if the active player let the window run out.
    ///
    /// Returns the player who failed to move, or `None` when the game is already over or
    /// the deadline has not been reached (for example because a move was just accepted).
    pub fn expire(&mut self, now: Instant) -> Option<ActorId> {
        if self.state.is_terminal() || now < self.deadline() {
            return None;
        }

        self.state = GameState::TimedOut(self.active);
        Some(self.active_player().id)
    }

    /// Column buttons derived from the current state.
    #[must_use]
    pub fn controls(&self) -> Vec<ColumnControl> {
        if self.state.is_terminal() {
            return Vec::new();
        }

        COLUMN_GLYPHS
            .iter()
            .enumerate()
            .map(|(column, &label)| ColumnControl {
                column,
                label,
                disabled: self.board.is_column_full(column),
            })
            .collect()
    }

    /// Builds the message for the current state.
    #[must_use]
    pub fn render(&self) -> GameRender {
        let active = self.active_player().id.mention();

        let status = match self.state {
            GameState::AwaitingMove => Some(format!("\n\n{active}'s move.")),
            GameState::Draw => Some("\n\nEnded in a tie.".to_string()),
            GameState::Won(_) => None,
            GameState::TimedOut(_) => {
                return GameRender {
                    content: Some(format!(
                        "Connect4: {active} did not move in time so the game ended."
                    )),
                    embed: None,
                    controls: Vec::new(),
                };
            }
        };

        let mut description = format!(
            "{} vs {}\n{}",
            self.players[0].id.mention(),
            self.players[1].id.mention(),
            self.board.render()
        );
        if let Some(status) = status {
            description.push_str(&status);
        }

        GameRender {
            content: matches!(self.state, GameState::Won(_)).then(|| format!("{active} has won.")),
            embed: Some(GameEmbed {
                title: "Connect Four",
                description,
                started_at: self.started_at,
            }),
            controls: self.controls(),
        }
    }
}
