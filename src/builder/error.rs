//! Build errors for automata.

use thiserror::Error;

/// A single broken well-formedness invariant.
///
/// Offending identifiers are rendered with their `Debug` representation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("Start state {start} is not a declared state")]
    StartNotDeclared { start: String },

    #[error("Accepting state {state} is not a declared state")]
    AcceptingNotDeclared { state: String },

    #[error("Transition source {state} on {symbol} is not a declared state")]
    UnknownSource { state: String, symbol: String },

    #[error("Transition symbol {symbol} from {state} is not in the alphabet")]
    UnknownSymbol { state: String, symbol: String },

    #[error("Transition destination {to} of ({from}, {symbol}) is not a declared state")]
    UnknownDestination {
        from: String,
        symbol: String,
        to: String,
    },
}

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("No states declared. Add at least one state")]
    NoStates,

    #[error("Empty alphabet. Add at least one symbol")]
    EmptyAlphabet,

    /// Every violation found, not just the first.
    #[error("Automaton description is malformed ({} violation(s))", .0.len())]
    Malformed(Vec<Violation>),

    #[error("Sink state {0} is already a state of the automaton")]
    SinkCollision(String),
}
