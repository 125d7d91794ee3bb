//! Core logic - framework-agnostic game, pagination and utility operations.
//!
//! Nothing in here talks to Discord. The bot layer resolves actors, feeds their actions
//! into these state machines and displays whatever they render.

/// Platform-neutral actor identity
pub mod actor;
/// Connect Four board and game session
pub mod connect_four;
/// Code-block text pages for long command output
pub mod pages;
/// Owner-restricted page navigation
pub mod paginator;
/// Random choices, numbers, cards and dice
pub mod rng;
