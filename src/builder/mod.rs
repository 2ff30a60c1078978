//! Builder API for automaton construction.
//!
//! Automata are only ever created through this module: directly with
//! [`AutomatonBuilder`], through the [`automaton!`](crate::automaton) macro,
//! or by deserialization, which delegates here. Building validates every
//! well-formedness invariant and reports all violations at once.

pub mod automaton;
pub mod error;
pub mod macros;
mod validate;

pub use automaton::AutomatonBuilder;
pub use error::{BuildError, Violation};

use crate::core::{Automaton, State, Symbol};

/// Build an automaton from `(from, symbol, to)` triples.
///
/// States and symbols are taken from the triples, plus `start` and
/// `accepting`. Handy for tests and small hand-written tables.
///
/// # Example
///
/// ```
/// use nerode::builder::from_triples;
///
/// let dfa = from_triples(
///     [(0, 'a', 1), (1, 'b', 0)],
///     0,
///     [1],
/// )
/// .unwrap();
///
/// assert_eq!(dfa.state_count(), 2);
/// assert!(dfa.accepts(&['a', 'b', 'a']));
/// ```
pub fn from_triples<S, C, T, F>(
    triples: T,
    start: S,
    accepting: F,
) -> Result<Automaton<S, C>, BuildError>
where
    S: State,
    C: Symbol,
    T: IntoIterator<Item = (S, C, S)>,
    F: IntoIterator<Item = S>,
{
    let accepting: Vec<S> = accepting.into_iter().collect();
    let mut builder = AutomatonBuilder::new()
        .state(start.clone())
        .states(accepting.iter().cloned())
        .start(start)
        .accepting_states(accepting);

    for (from, symbol, to) in triples {
        builder = builder
            .state(from.clone())
            .state(to.clone())
            .symbol(symbol.clone())
            .transition(from, symbol, to);
    }

    builder.build()
}
