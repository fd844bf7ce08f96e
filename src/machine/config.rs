//! Machine configuration.

use crate::core::State;
use crate::machine::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque per-state definition.
///
/// The machine reads nothing from it; only the key it is filed under
/// matters, declaring the state as a valid `change_state` target. The
/// record exists so caller data survives a serde round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Free-form display label for UI surfaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Configuration consumed by `Fsm::new`.
///
/// The initial state is required; the declared state keys become the
/// machine's valid `change_state` targets. A config can be assembled
/// fluently or read from JSON.
///
/// # Example
///
/// ```rust
/// use daycycle::{Fsm, FsmConfig, State};
///
/// let config = FsmConfig::new()
///     .initial(State::Normal)
///     .declare(State::Normal)
///     .declare(State::Busy);
///
/// let fsm = Fsm::new(config)?;
/// assert_eq!(fsm.state(), State::Normal);
/// # Ok::<(), daycycle::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FsmConfig {
    /// The state the machine starts in. Required.
    #[serde(default)]
    pub initial: Option<State>,

    /// Declared states, keyed by state. Only the key set is read by the
    /// machine.
    #[serde(default)]
    pub states: BTreeMap<State, StateConfig>,
}

impl FsmConfig {
    /// Create an empty config. Set an initial state before handing it
    /// to `Fsm::new`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard domain config: all four states declared, starting
    /// at `normal`.
    pub fn standard() -> Self {
        let mut config = Self::new().initial(State::Normal);
        for state in State::ALL {
            config = config.declare(state);
        }
        config
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state with a default definition.
    pub fn declare(self, state: State) -> Self {
        self.declare_with(state, StateConfig::default())
    }

    /// Declare a state with an explicit definition.
    pub fn declare_with(mut self, state: State, definition: StateConfig) -> Self {
        self.states.insert(state, definition);
        self
    }

    /// Read a config from a JSON document.
    ///
    /// A document without an `initial` key parses fine; `Fsm::new`
    /// rejects it afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use daycycle::{FsmConfig, State};
    ///
    /// let config = FsmConfig::from_json(
    ///     r#"{"initial": "normal", "states": {"normal": {}, "busy": {"label": "studying"}}}"#,
    /// )?;
    ///
    /// assert_eq!(config.initial, Some(State::Normal));
    /// assert_eq!(config.states.len(), 2);
    /// # Ok::<(), daycycle::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Malformed(err.to_string()))
    }
}
