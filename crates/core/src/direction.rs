//! Shared heading state with reversal rejection.
//!
//! Keeps two headings: `current`, which a mover acts on, and `pending_from`,
//! the heading in effect before the most recent accepted change. Both are
//! updated together under one lock so readers never see a torn pair.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::{Direction, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Heading {
    current: Direction,
    pending_from: Direction,
}

/// Thread-safe current/previous heading pair.
#[derive(Debug)]
pub struct DirectionState {
    inner: Mutex<Heading>,
}

impl DirectionState {
    /// Start heading [`Direction::Right`].
    pub fn new() -> Self {
        Self::with_heading(Direction::default())
    }

    pub fn with_heading(initial: Direction) -> Self {
        Self {
            inner: Mutex::new(Heading {
                current: initial,
                pending_from: initial,
            }),
        }
    }

    // Both fields are written together; a poisoned guard still holds a valid pair.
    fn lock(&self) -> MutexGuard<'_, Heading> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request a new heading.
    ///
    /// Returns `false` without touching the state when `requested` is the
    /// reverse of the current heading. Otherwise the current heading moves into
    /// `pending_from` and `requested` becomes current.
    pub fn try_set(&self, requested: Direction) -> bool {
        let mut heading = self.lock();
        if requested == heading.current.opposite() {
            tracing::debug!(
                current = heading.current.as_str(),
                requested = requested.as_str(),
                "heading reversal rejected"
            );
            return false;
        }

        heading.pending_from = heading.current;
        heading.current = requested;
        true
    }

    /// Apply a decoded key event. `Quit` and `Idle` are ignored.
    pub fn apply(&self, event: KeyEvent) -> bool {
        match event.direction() {
            Some(dir) => self.try_set(dir),
            None => false,
        }
    }

    /// Consistent `(current, pending_from)` pair.
    pub fn snapshot(&self) -> (Direction, Direction) {
        let heading = self.lock();
        (heading.current, heading.pending_from)
    }

    pub fn current(&self) -> Direction {
        self.lock().current
    }
}

impl Default for DirectionState {
    fn default() -> Self {
        Self::new()
    }
}
