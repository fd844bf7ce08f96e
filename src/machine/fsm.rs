//! The daily-routine machine.

use crate::core::{table, Event, State, TransitionLog};
use crate::machine::config::FsmConfig;
use crate::machine::error::{ConfigError, TransitionError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A four-state daily-routine machine with linear undo/redo.
///
/// The machine owns all of its observable state: the current state, the
/// chronological log of every state entered, the stack of states
/// displaced by `undo`, and the flag that keeps `redo` eligible.
/// Exactly one caller is expected to drive it; for cross-thread use,
/// wrap the whole machine in a single `Mutex` so each multi-field
/// update stays one atomic unit.
///
/// # Example
///
/// ```rust
/// use daycycle::{Event, Fsm, FsmConfig, State};
///
/// let mut fsm = Fsm::new(FsmConfig::standard())?;
/// assert_eq!(fsm.state(), State::Normal);
///
/// fsm.trigger(Event::Study)?;
/// assert_eq!(fsm.state(), State::Busy);
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), State::Normal);
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), State::Busy);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fsm {
    state: State,
    log: TransitionLog,
    cancel_stack: Vec<State>,
    redo_armed: bool,
    valid_states: BTreeSet<State>,
}

impl Fsm {
    /// Create a machine from a config.
    ///
    /// The config must carry an initial state; the declared state keys
    /// become the valid `change_state` targets. The log starts seeded
    /// with the initial state.
    pub fn new(config: FsmConfig) -> Result<Self, ConfigError> {
        let initial = config.initial.ok_or(ConfigError::MissingInitialState)?;
        Ok(Self {
            state: initial,
            log: TransitionLog::seeded(initial),
            cancel_stack: Vec::new(),
            redo_armed: false,
            valid_states: config.states.into_keys().collect(),
        })
    }

    /// Get the current state (pure).
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the transition log (pure).
    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// Get the states declared at construction (pure).
    pub fn valid_states(&self) -> &BTreeSet<State> {
        &self.valid_states
    }

    /// Go directly to `target`.
    ///
    /// `target` must be declared in the config, otherwise the call
    /// fails with `TransitionError::InvalidState` and nothing changes.
    /// On success the new state is logged and redo eligibility is
    /// forfeited.
    pub fn change_state(&mut self, target: State) -> Result<State, TransitionError> {
        if !self.valid_states.contains(&target) {
            return Err(TransitionError::InvalidState { state: target });
        }
        self.state = target;
        self.log.enter(target);
        self.redo_armed = false;
        Ok(target)
    }

    /// Fire `event` and follow the transition table.
    ///
    /// Any call forfeits redo eligibility, even when the event has no
    /// rule for the current state; in that case the state and log are
    /// left untouched and the call fails with
    /// `TransitionError::InvalidTransition`.
    pub fn trigger(&mut self, event: Event) -> Result<State, TransitionError> {
        self.redo_armed = false;
        match table::next_state(self.state, event) {
            Some(next) => self.change_state(next),
            None => Err(TransitionError::InvalidTransition {
                from: self.state,
                event,
            }),
        }
    }

    /// Go back to `normal`, through the same validation as
    /// `change_state`.
    pub fn reset(&mut self) -> Result<State, TransitionError> {
        self.change_state(State::Normal)
    }

    /// The states an event can fire from, or the full fixed domain
    /// list when `event` is `None`.
    ///
    /// The answer comes from the static table alone; it does not depend
    /// on the current state or on the states declared at construction.
    pub fn states(&self, event: Option<Event>) -> Vec<State> {
        match event {
            None => State::ALL.to_vec(),
            Some(event) => table::source_states(event),
        }
    }

    /// Step one state back through the log.
    ///
    /// Needs at least two log entries: the current state plus one to
    /// fall back to. The displaced state is kept for `redo`. Returns
    /// `false` without mutating when the log is too short.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.log.rollback() else {
            return false;
        };
        self.cancel_stack.push(self.state);
        self.state = previous;
        self.redo_armed = true;
        true
    }

    /// Restore the most recently undone state.
    ///
    /// Requires a non-empty cancel stack and redo eligibility.
    /// Eligibility is granted by `undo` and forfeited by `change_state`
    /// and `trigger`, never by `redo` itself, so consecutive calls
    /// drain the stack. The restored state is not re-logged.
    pub fn redo(&mut self) -> bool {
        if !self.redo_armed {
            return false;
        }
        let Some(next) = self.cancel_stack.pop() else {
            return false;
        };
        self.state = next;
        true
    }

    /// Whether `undo` would currently succeed (pure).
    pub fn can_undo(&self) -> bool {
        self.log.len() >= 2
    }

    /// Whether `redo` would currently succeed (pure).
    pub fn can_redo(&self) -> bool {
        self.redo_armed && !self.cancel_stack.is_empty()
    }

    /// How many undone states `redo` could still restore (pure).
    pub fn pending_redo(&self) -> usize {
        self.cancel_stack.len()
    }

    /// Empty the log, with no re-seed.
    ///
    /// The current state, the cancel stack and redo eligibility are
    /// left untouched. `undo` fails until at least two new entries
    /// accumulate.
    pub fn clear_history(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Fsm {
        Fsm::new(FsmConfig::standard()).unwrap()
    }

    #[test]
    fn new_requires_an_initial_state() {
        let config = FsmConfig::new().declare(State::Normal);
        let result = Fsm::new(config);
        assert!(matches!(result, Err(ConfigError::MissingInitialState)));
    }

    #[test]
    fn new_seeds_state_and_log() {
        let fsm = standard();
        assert_eq!(fsm.state(), State::Normal);
        assert_eq!(fsm.history().len(), 1);
        assert_eq!(fsm.history().states(), vec![State::Normal]);
        assert!(!fsm.can_undo());
        assert!(!fsm.can_redo());
    }

    #[test]
    fn valid_states_come_from_declared_keys() {
        let config = FsmConfig::new()
            .initial(State::Normal)
            .declare(State::Normal)
            .declare(State::Busy);
        let fsm = Fsm::new(config).unwrap();

        assert!(fsm.valid_states().contains(&State::Busy));
        assert!(!fsm.valid_states().contains(&State::Hungry));
    }

    #[test]
    fn change_state_logs_and_returns_the_new_state() {
        let mut fsm = standard();
        let entered = fsm.change_state(State::Hungry).unwrap();

        assert_eq!(entered, State::Hungry);
        assert_eq!(fsm.state(), State::Hungry);
        assert_eq!(fsm.history().states(), vec![State::Normal, State::Hungry]);
    }

    #[test]
    fn change_state_rejects_undeclared_targets() {
        let config = FsmConfig::new()
            .initial(State::Normal)
            .declare(State::Normal)
            .declare(State::Busy);
        let mut fsm = Fsm::new(config).unwrap();

        let result = fsm.change_state(State::Sleeping);
        assert!(matches!(
            result,
            Err(TransitionError::InvalidState {
                state: State::Sleeping
            })
        ));
        assert_eq!(fsm.state(), State::Normal);
        assert_eq!(fsm.history().len(), 1);
    }

    #[test]
    fn trigger_requires_the_target_to_be_declared() {
        // Table rule exists, but the target state was never declared.
        let config = FsmConfig::new()
            .initial(State::Normal)
            .declare(State::Normal);
        let mut fsm = Fsm::new(config).unwrap();

        let result = fsm.trigger(Event::Study);
        assert!(matches!(
            result,
            Err(TransitionError::InvalidState { state: State::Busy })
        ));
        assert_eq!(fsm.state(), State::Normal);
    }

    #[test]
    fn failed_trigger_leaves_state_and_log_untouched() {
        let mut fsm = standard();
        let result = fsm.trigger(Event::Eat);

        assert!(matches!(
            result,
            Err(TransitionError::InvalidTransition {
                from: State::Normal,
                event: Event::Eat
            })
        ));
        assert_eq!(fsm.state(), State::Normal);
        assert_eq!(fsm.history().len(), 1);
    }

    #[test]
    fn reset_goes_back_to_normal_through_validation() {
        let mut fsm = standard();
        fsm.change_state(State::Sleeping).unwrap();

        fsm.reset().unwrap();
        assert_eq!(fsm.state(), State::Normal);
        assert_eq!(
            fsm.history().states(),
            vec![State::Normal, State::Sleeping, State::Normal]
        );
    }

    #[test]
    fn reset_fails_when_normal_is_not_declared() {
        let config = FsmConfig::new().initial(State::Busy).declare(State::Busy);
        let mut fsm = Fsm::new(config).unwrap();

        let result = fsm.reset();
        assert!(matches!(
            result,
            Err(TransitionError::InvalidState {
                state: State::Normal
            })
        ));
        assert_eq!(fsm.state(), State::Busy);
    }

    #[test]
    fn undo_restores_the_previous_state() {
        let mut fsm = standard();
        fsm.trigger(Event::Study).unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.state(), State::Normal);
        assert_eq!(fsm.history().len(), 1);
        assert_eq!(fsm.pending_redo(), 1);
        assert!(fsm.can_redo());
    }

    #[test]
    fn undo_fails_on_a_fresh_machine() {
        let mut fsm = standard();
        assert!(!fsm.undo());
        assert_eq!(fsm.state(), State::Normal);
        assert_eq!(fsm.pending_redo(), 0);
    }

    #[test]
    fn redo_fails_with_an_empty_cancel_stack() {
        let mut fsm = standard();
        assert!(!fsm.redo());

        fsm.trigger(Event::Study).unwrap();
        assert!(!fsm.redo());
        assert_eq!(fsm.state(), State::Busy);
    }

    #[test]
    fn change_state_forfeits_redo_eligibility() {
        let mut fsm = standard();
        fsm.trigger(Event::Study).unwrap();
        assert!(fsm.undo());

        fsm.change_state(State::Sleeping).unwrap();

        // The cancel stack still holds an entry, but redo is no longer
        // eligible.
        assert_eq!(fsm.pending_redo(), 1);
        assert!(!fsm.redo());
        assert_eq!(fsm.state(), State::Sleeping);
    }

    #[test]
    fn even_a_failed_trigger_forfeits_redo_eligibility() {
        let mut fsm = standard();
        fsm.trigger(Event::Study).unwrap();
        assert!(fsm.undo());
        assert!(fsm.can_redo());

        // No rule for (normal, eat): state stays put, but the trigger
        // call alone disarms redo.
        assert!(fsm.trigger(Event::Eat).is_err());
        assert_eq!(fsm.pending_redo(), 1);
        assert!(!fsm.redo());
    }

    #[test]
    fn consecutive_redos_drain_the_cancel_stack() {
        let mut fsm = standard();
        fsm.trigger(Event::Study).unwrap();
        fsm.trigger(Event::GetHungry).unwrap();

        assert!(fsm.undo());
        assert!(fsm.undo());
        assert_eq!(fsm.state(), State::Normal);
        assert_eq!(fsm.pending_redo(), 2);

        assert!(fsm.redo());
        assert_eq!(fsm.state(), State::Busy);
        assert!(fsm.redo());
        assert_eq!(fsm.state(), State::Hungry);
        assert!(!fsm.redo());
    }

    #[test]
    fn redo_does_not_relog_the_restored_state() {
        let mut fsm = standard();
        fsm.trigger(Event::Study).unwrap();
        assert!(fsm.undo());
        assert!(fsm.redo());

        assert_eq!(fsm.state(), State::Busy);
        assert_eq!(fsm.history().states(), vec![State::Normal]);
    }

    #[test]
    fn states_lists_the_fixed_domain_without_an_event() {
        let fsm = standard();
        assert_eq!(fsm.states(None), State::ALL.to_vec());

        // Independent of the declared set and of the current state.
        let config = FsmConfig::new().initial(State::Busy).declare(State::Busy);
        let restricted = Fsm::new(config).unwrap();
        assert_eq!(restricted.states(None), State::ALL.to_vec());
    }

    #[test]
    fn states_filters_by_event_source() {
        let fsm = standard();
        assert_eq!(
            fsm.states(Some(Event::GetHungry)),
            vec![State::Busy, State::Sleeping]
        );
        assert_eq!(fsm.states(Some(Event::Study)), vec![State::Normal]);
    }

    #[test]
    fn clear_history_disables_undo_until_repopulated() {
        let mut fsm = standard();
        fsm.trigger(Event::Study).unwrap();
        fsm.clear_history();

        assert!(fsm.history().is_empty());
        assert_eq!(fsm.state(), State::Busy);
        assert!(!fsm.undo());

        fsm.trigger(Event::GetHungry).unwrap();
        assert!(!fsm.undo());

        fsm.trigger(Event::Eat).unwrap();
        assert!(fsm.undo());
        assert_eq!(fsm.state(), State::Hungry);
    }

    #[test]
    fn clear_history_leaves_the_cancel_stack_alone() {
        let mut fsm = standard();
        fsm.trigger(Event::Study).unwrap();
        assert!(fsm.undo());

        fsm.clear_history();
        assert_eq!(fsm.pending_redo(), 1);
        assert!(fsm.redo());
        assert_eq!(fsm.state(), State::Busy);
    }
}
