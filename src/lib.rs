//! Daycycle: a daily-routine state machine with linear undo/redo
//!
//! Daycycle models a fixed four-state day (`normal`, `busy`, `hungry`,
//! `sleeping`) driven by named events (`study`, `get_tired`,
//! `get_hungry`, `eat`, `get_up`). Every state entered is appended to a
//! transition log, and the log backs a linear undo/redo: `undo` steps
//! back through it one state at a time, `redo` restores what `undo`
//! displaced until a fresh transition forfeits the replay.
//!
//! # Core Concepts
//!
//! - **State**: one of the four fixed domain states
//! - **Event**: a named trigger dispatched through a static table
//! - **Transition log**: chronological record of states entered, the
//!   undo source
//! - **Cancel stack**: LIFO buffer of undone states, the redo source
//!
//! # Example
//!
//! ```rust
//! use daycycle::{Event, Fsm, FsmConfig, State};
//!
//! let mut fsm = Fsm::new(FsmConfig::standard())?;
//!
//! fsm.trigger(Event::Study)?; // normal -> busy
//! fsm.trigger(Event::GetHungry)?; // busy -> hungry
//! fsm.trigger(Event::Eat)?; // hungry -> normal
//! assert_eq!(fsm.state(), State::Normal);
//!
//! assert!(fsm.undo()); // back to hungry
//! assert_eq!(fsm.state(), State::Hungry);
//! assert!(fsm.redo()); // forward to normal again
//! assert_eq!(fsm.state(), State::Normal);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod machine;

// Re-export commonly used types
pub use self::core::{Event, LogEntry, State, TransitionLog};
pub use self::machine::{ConfigError, Fsm, FsmConfig, StateConfig, TransitionError};
