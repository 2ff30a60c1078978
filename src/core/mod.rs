//! Core automaton types.
//!
//! This module contains the immutable data model:
//! - State and symbol identifiers via the `State` and `Symbol` traits
//! - Composite states (`StateSet`) produced by subset construction
//! - The `Automaton` value and its transition lookups
//! - Immutable simulation traces (`Run`)
//!
//! Nothing here mutates an automaton after it is built.

mod automaton;
mod run;
mod state;

pub use automaton::{Automaton, AutomatonDescription, Transition, TransitionEntry};
pub use run::{Run, RunStep};
pub use state::{State, StateSet, Symbol};
