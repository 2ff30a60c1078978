//! Completion with an explicit sink state.

use crate::builder::BuildError;
use crate::core::{Automaton, State, Symbol};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Make the transition function total by routing every undefined
/// `(state, symbol)` pair, including the sink's own, to `sink`.
///
/// The sink is non-accepting, so the language is unchanged. Fails with
/// [`BuildError::SinkCollision`] if `sink` is already a state.
///
/// # Example
///
/// ```
/// use nerode::builder::from_triples;
///
/// let partial = from_triples([("p", 'a', "q")], "p", ["q"]).unwrap();
/// let total = partial.complete("dead").unwrap();
///
/// assert_eq!(total.state_count(), 3);
/// assert_eq!(total.transition_count(), 3);
/// assert!(total.accepts(&['a']));
/// ```
pub fn complete<S: State, C: Symbol>(
    automaton: &Automaton<S, C>,
    sink: S,
) -> Result<Automaton<S, C>, BuildError> {
    if automaton.states().contains(&sink) {
        return Err(BuildError::SinkCollision(format!("{sink:?}")));
    }

    let mut states = automaton.states().clone();
    states.insert(sink.clone());

    let mut transitions: BTreeMap<(S, C), BTreeSet<S>> = automaton
        .transitions()
        .map(|(state, symbol, targets)| ((state.clone(), symbol.clone()), targets.clone()))
        .collect();

    let mut added = 0usize;
    for state in &states {
        for symbol in automaton.alphabet() {
            transitions
                .entry((state.clone(), symbol.clone()))
                .or_insert_with(|| {
                    added += 1;
                    BTreeSet::from([sink.clone()])
                });
        }
    }

    debug!(added, "completed transition function");

    Ok(Automaton::from_parts(
        states,
        automaton.alphabet().clone(),
        transitions,
        automaton.start().clone(),
        automaton.accepting().clone(),
    ))
}
