//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Connect Four
pub mod games;

/// Ping, help and command listings
pub mod general;

/// Random picks, numbers, cards and dice
pub mod rng;

// Export commands
pub use games::*;
pub use general::*;
pub use rng::*;
