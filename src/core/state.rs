//! The fixed set of domain states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state of the daily-routine machine.
///
/// The domain is closed: exactly these four states exist, and the event
/// table in `core::table` only ever produces them. Wire names are the
/// snake_case forms (`"normal"`, `"busy"`, `"hungry"`, `"sleeping"`).
///
/// # Example
///
/// ```rust
/// use daycycle::State;
///
/// assert_eq!(State::Sleeping.name(), "sleeping");
/// assert_eq!(serde_json::to_string(&State::Hungry).unwrap(), "\"hungry\"");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Normal,
    Busy,
    Hungry,
    Sleeping,
}

impl State {
    /// Every domain state, in canonical order.
    pub const ALL: [State; 4] = [State::Normal, State::Busy, State::Hungry, State::Sleeping];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Busy => "busy",
            Self::Hungry => "hungry",
            Self::Sleeping => "sleeping",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
