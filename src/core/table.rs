//! The static event-dispatch table.
//!
//! Transition rules live in one const table rather than in dispatch
//! control flow, so the rules can be inspected and tested in isolation.

use super::event::Event;
use super::state::State;

/// Every `(from, event, to)` rule of the machine, in canonical order.
///
/// The order is observable: [`source_states`] lists an event's source
/// states in table order.
pub const TRANSITIONS: [(State, Event, State); 6] = [
    (State::Normal, Event::Study, State::Busy),
    (State::Busy, Event::GetTired, State::Sleeping),
    (State::Busy, Event::GetHungry, State::Hungry),
    (State::Hungry, Event::Eat, State::Normal),
    (State::Sleeping, Event::GetHungry, State::Hungry),
    (State::Sleeping, Event::GetUp, State::Normal),
];

/// Look up the state `event` leads to from `from`.
///
/// Returns `None` when the table has no rule for the pair.
pub fn next_state(from: State, event: Event) -> Option<State> {
    TRANSITIONS
        .iter()
        .find(|(source, trigger, _)| *source == from && *trigger == event)
        .map(|(_, _, target)| *target)
}

/// The states `event` can fire from, in table order.
///
/// An event with no rule yields an empty vec, never an error.
pub fn source_states(event: Event) -> Vec<State> {
    TRANSITIONS
        .iter()
        .filter(|(_, trigger, _)| *trigger == event)
        .map(|(source, _, _)| *source)
        .collect()
}
