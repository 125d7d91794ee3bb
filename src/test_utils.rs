//! Shared test utilities for cog-buddy.
//!
//! Fixed participants and helpers that build sessions and paginators with the default
//! windows, returning the `Instant` they were created at so tests can move time forward
//! explicitly.

#![allow(clippy::unwrap_used)]

use crate::core::{
    actor::{Actor, ActorId},
    connect_four::session::{DEFAULT_MOVE_TIMEOUT, Session},
    paginator::{Paginator, PaginatorKind},
};
use std::time::Instant;

/// Challenger in game tests and paginator owner
pub const ALICE: ActorId = ActorId(1);
/// Opponent in game tests
pub const BOB: ActorId = ActorId(2);
/// Bystander who is part of nothing
pub const CAROL: ActorId = ActorId(3);

/// Starts a game of ALICE (red, first) against BOB.
pub fn new_session() -> (Session, Instant) {
    let now = Instant::now();
    let session = Session::start(
        Actor::human(ALICE.0),
        Actor::human(BOB.0),
        DEFAULT_MOVE_TIMEOUT,
        now,
    )
    .unwrap();
    (session, now)
}

/// Plays `columns` in order, each by whoever is on turn.
///
/// # Panics
/// Panics if any move is rejected.
pub fn play_moves(session: &mut Session, columns: &[usize], now: Instant) {
    for &column in columns {
        let mover = session.active_player().id;
        session.handle_move(mover, column, now).unwrap();
    }
}

/// A paginator owned by ALICE over `"page 0"` .. `"page {count - 1}"`.
pub fn new_paginator(count: usize) -> (Paginator<String>, Instant) {
    let now = Instant::now();
    let pages = (0..count).map(|i| format!("page {i}")).collect();
    let paginator = Paginator::new(
        ALICE,
        pages,
        PaginatorKind::Embeds.default_timeout(),
        now,
    )
    .unwrap();
    (paginator, now)
}
