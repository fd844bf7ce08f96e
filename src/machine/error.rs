//! Error types for machine construction and transitions.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors that can occur when constructing a machine from a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state not specified. Set `initial` before constructing the machine")]
    MissingInitialState,

    #[error("Config deserialization failed: {0}")]
    Malformed(String),
}

/// Errors that can occur during transitions.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The target state is not declared in the machine's config
    #[error("State '{state}' is not declared in this machine")]
    InvalidState { state: State },

    /// The event has no rule for the current state
    #[error("No transition from '{from}' on event '{event}'")]
    InvalidTransition { from: State, event: Event },
}
