//! Connect Four - board engine and the two-player session built on top of it.

/// Grid, placement and win detection
pub mod board;
/// Turn order, validation, timeout and rendering
pub mod session;

pub use board::{Board, COLUMNS, Disc, ROWS};
pub use session::{GameRender, GameState, MoveOutcome, Session, Slot};
