//! The fixed set of domain events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named trigger consumed by `Fsm::trigger`.
///
/// Events select the next state through the static table in
/// `core::table`. Wire names are the snake_case forms (`"study"`,
/// `"get_tired"`, `"get_hungry"`, `"eat"`, `"get_up"`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Study,
    GetTired,
    GetHungry,
    Eat,
    GetUp,
}

impl Event {
    /// Every domain event, in canonical order.
    pub const ALL: [Event; 5] = [
        Event::Study,
        Event::GetTired,
        Event::GetHungry,
        Event::Eat,
        Event::GetUp,
    ];

    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::GetTired => "get_tired",
            Self::GetHungry => "get_hungry",
            Self::Eat => "eat",
            Self::GetUp => "get_up",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
