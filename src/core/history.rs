//! The transition log backing undo.
//!
//! Every state the machine enters is appended here in order, starting
//! with the initial state. `rollback` is the undo primitive: it needs
//! at least two entries, the current state plus one to fall back to.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One log entry: a state and when it was entered.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// The state that was entered
    pub state: State,
    /// When it was entered
    pub entered_at: DateTime<Utc>,
}

/// Chronological log of every state entered.
///
/// # Example
///
/// ```rust
/// use daycycle::{State, TransitionLog};
///
/// let mut log = TransitionLog::seeded(State::Normal);
/// log.enter(State::Busy);
///
/// assert_eq!(log.states(), vec![State::Normal, State::Busy]);
/// assert_eq!(log.rollback(), Some(State::Normal));
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    entries: Vec<LogEntry>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a log seeded with the machine's initial state.
    pub fn seeded(initial: State) -> Self {
        let mut log = Self::new();
        log.enter(initial);
        log
    }

    /// Append a newly entered state, stamped with the current time.
    pub fn enter(&mut self, state: State) {
        self.entries.push(LogEntry {
            state,
            entered_at: Utc::now(),
        });
    }

    /// Drop the newest entry and return the state of the entry before it.
    ///
    /// Returns `None` without mutating unless the log has at least two
    /// entries.
    pub fn rollback(&mut self) -> Option<State> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        self.entries.last().map(|entry| entry.state)
    }

    /// Empty the log entirely, with no re-seed.
    ///
    /// The next `rollback` fails until at least two new entries
    /// accumulate.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The path of states traversed, oldest first.
    pub fn states(&self) -> Vec<State> {
        self.entries.iter().map(|entry| entry.state).collect()
    }

    /// The newest logged state, if any.
    pub fn last_state(&self) -> Option<State> {
        self.entries.last().map(|entry| entry.state)
    }

    /// Elapsed time between the first and last entry.
    ///
    /// Returns `None` on an empty log.
    pub fn duration(&self) -> Option<Duration> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => last
                .entered_at
                .signed_duration_since(first.entered_at)
                .to_std()
                .ok(),
            _ => None,
        }
    }
}
