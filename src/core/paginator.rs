//! Paginator state machine - bounded page cursor with owner-only navigation.
//!
//! The paginator holds a non-empty list of pre-rendered pages and a 0-based cursor that
//! always stays inside `0..=last_index`. Only the owner may navigate. After
//! [`Paginator::stop`] or an inactivity timeout it is inert and rejects everything with
//! [`Error::PaginatorClosed`]. Page numbers shown to users are 1-based.

use crate::{
    core::actor::ActorId,
    errors::{Error, Result},
};
use std::time::{Duration, Instant};
use tracing::debug;

/// Which flavour of paginator is being shown; the two differ only in their default
/// inactivity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorKind {
    /// Listing of embeds
    Embeds,
    /// Code-block pages of command output
    CommandOutput,
}

impl PaginatorKind {
    /// Inactivity window used when the configuration does not override it.
    #[must_use]
    pub const fn default_timeout(self) -> Duration {
        match self {
            Self::Embeds => Duration::from_secs(180),
            Self::CommandOutput => Duration::from_secs(300),
        }
    }
}

/// Lifecycle of a paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    /// Accepting navigation
    Active,
    /// The owner pressed quit
    Stopped,
    /// Nobody navigated within the window
    TimedOut,
}

/// Enabled/disabled state of the navigation buttons plus the position label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// Jump to first page
    pub first_disabled: bool,
    /// One page back
    pub previous_disabled: bool,
    /// One page forward
    pub next_disabled: bool,
    /// Jump to last page
    pub last_disabled: bool,
    /// `current/total`, 1-based
    pub indicator: String,
}

/// Navigates a fixed list of pages on behalf of a single owner.
#[derive(Debug, Clone)]
pub struct Paginator<P> {
    pages: Vec<P>,
    cursor: usize,
    owner: ActorId,
    state: PaginatorState,
    window: Duration,
    last_activity: Instant,
}

impl<P> Paginator<P> {
    /// Creates a paginator positioned on the first page.
    ///
    /// Fails with [`Error::NoPages`] when `pages` is empty.
    pub fn new(owner: ActorId, pages: Vec<P>, window: Duration, now: Instant) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::NoPages);
        }

        Ok(Self {
            pages,
            cursor: 0,
            owner,
            state: PaginatorState::Active,
            window,
            last_activity: now,
        })
    }

    /// Page under the cursor.
    #[must_use]
    pub fn current(&self) -> &P {
        &self.pages[self.cursor]
    }

    /// 0-based cursor.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false, a paginator is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// 0-based index of the last page.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    /// Who may navigate.
    #[must_use]
    pub const fn owner(&self) -> ActorId {
        self.owner
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PaginatorState {
        self.state
    }

    /// True while navigation is accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == PaginatorState::Active
    }

    /// Moment the paginator goes inert unless someone navigates first.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.last_activity + self.window
    }

    /// Time left until [`Paginator::deadline`].
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }

    /// Checks that the paginator is live and `actor` owns it.
    pub fn authorize(&self, actor: ActorId) -> Result<()> {
        if !self.is_active() {
            return Err(Error::PaginatorClosed);
        }
        if actor != self.owner {
            return Err(Error::NotOwner { owner: self.owner.0 });
        }
        Ok(())
    }

    /// Accepts a press that does not move the cursor (such as opening the page dialog)
    /// and restarts the inactivity window.
    pub fn touch(&mut self, actor: ActorId, now: Instant) -> Result<()> {
        self.authorize(actor)?;
        self.last_activity = now;
        Ok(())
    }

    fn move_to(&mut self, actor: ActorId, index: usize, now: Instant) -> Result<&P> {
        self.authorize(actor)?;
        self.cursor = index.min(self.last_index());
        self.last_activity = now;
        debug!(owner = %self.owner, cursor = self.cursor, "Paginator moved");
        Ok(self.current())
    }

    /// Goes to the first page.
    pub fn first(&mut self, actor: ActorId, now: Instant) -> Result<&P> {
        self.move_to(actor, 0, now)
    }

    /// Goes one page back, staying on the first page.
    pub fn previous(&mut self, actor: ActorId, now: Instant) -> Result<&P> {
        self.move_to(actor, self.cursor.saturating_sub(1), now)
    }

    /// Goes one page forward, staying on the last page.
    pub fn next(&mut self, actor: ActorId, now: Instant) -> Result<&P> {
        self.move_to(actor, self.cursor.saturating_add(1), now)
    }

    /// Goes to the last page.
    pub fn last(&mut self, actor: ActorId, now: Instant) -> Result<&P> {
        let last = self.last_index();
        self.move_to(actor, last, now)
    }

    /// Goes to the 1-based page `display_index`.
    ///
    /// Anything outside `1..=len` is rejected with [`Error::OutOfRange`] and leaves the
    /// cursor where it was.
    pub fn jump_to(&mut self, actor: ActorId, display_index: usize, now: Instant) -> Result<&P> {
        self.authorize(actor)?;
        if !(1..=self.len()).contains(&display_index) {
            return Err(Error::OutOfRange {
                requested: display_index,
                max: self.len(),
            });
        }
        self.move_to(actor, display_index - 1, now)
    }

    /// Owner quits; the paginator becomes inert.
    pub fn stop(&mut self, actor: ActorId) -> Result<()> {
        self.authorize(actor)?;
        self.state = PaginatorState::Stopped;
        Ok(())
    }

    /// Goes inert when the window ran out. Returns true only on that transition.
    pub fn expire(&mut self, now: Instant) -> bool {
        if !self.is_active() || now < self.deadline() {
            return false;
        }
        self.state = PaginatorState::TimedOut;
        true
    }

    /// Button state for the current position.
    #[must_use]
    pub fn controls(&self) -> PageControls {
        let at_start = self.cursor == 0;
        let at_end = self.cursor == self.last_index();
        PageControls {
            first_disabled: at_start,
            previous_disabled: at_start,
            next_disabled: at_end,
            last_disabled: at_end,
            indicator: format!("{}/{}", self.cursor + 1, self.len()),
        }
    }
}

/// Parses the text typed into the "go to page" dialog.
///
/// Only plain digits are accepted; the range is checked by [`Paginator::jump_to`].
pub fn parse_page(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidInput {
        input: input.to_string(),
    };

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse().map_err(|_| invalid())
}
