//! The stateful shell around the pure core.
//!
//! This module owns machine policy: config validation at construction,
//! validated direct transitions, table-driven event dispatch, and the
//! two-stack undo/redo mechanism.

mod config;
mod error;
mod fsm;

pub use config::{FsmConfig, StateConfig};
pub use error::{ConfigError, TransitionError};
pub use fsm::Fsm;
