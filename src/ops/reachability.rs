//! Removal of states unreachable from the start state.

use crate::core::{Automaton, State, Symbol};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::debug;

/// Find all states reachable from the start state, the start included.
pub fn reachable_states<S: State, C: Symbol>(automaton: &Automaton<S, C>) -> BTreeSet<S> {
    let mut reachable = BTreeSet::new();
    let mut queue = VecDeque::from([automaton.start()]);

    while let Some(state) = queue.pop_front() {
        if !reachable.insert(state.clone()) {
            continue;
        }

        for symbol in automaton.alphabet() {
            queue.extend(
                automaton
                    .transition(state, symbol)
                    .targets()
                    .filter(|next| !reachable.contains(*next)),
            );
        }
    }

    reachable
}

/// Restrict an automaton to the states reachable from its start state.
///
/// Transitions leaving unreachable states are dropped. The language is
/// unchanged and the operation is idempotent.
///
/// # Example
///
/// ```
/// use nerode::builder::AutomatonBuilder;
///
/// let automaton = AutomatonBuilder::new()
///     .states(["start", "island"])
///     .symbol('a')
///     .start("start")
///     .accepting_states(["start", "island"])
///     .transition("island", 'a', "start")
///     .build()
///     .unwrap();
///
/// let trimmed = automaton.remove_unreachable();
/// assert_eq!(trimmed.state_count(), 1);
/// assert_eq!(trimmed.transition_count(), 0);
/// ```
pub fn remove_unreachable<S: State, C: Symbol>(automaton: &Automaton<S, C>) -> Automaton<S, C> {
    let reachable = reachable_states(automaton);

    let transitions: BTreeMap<(S, C), BTreeSet<S>> = automaton
        .transitions()
        .filter(|(state, _, _)| reachable.contains(*state))
        .filter_map(|(state, symbol, targets)| {
            let kept: BTreeSet<S> = targets.intersection(&reachable).cloned().collect();
            (!kept.is_empty()).then(|| ((state.clone(), symbol.clone()), kept))
        })
        .collect();

    let accepting = automaton
        .accepting()
        .intersection(&reachable)
        .cloned()
        .collect();

    debug!(
        states = automaton.state_count(),
        reachable = reachable.len(),
        "removed unreachable states"
    );

    Automaton::from_parts(
        reachable,
        automaton.alphabet().clone(),
        transitions,
        automaton.start().clone(),
        accepting,
    )
}
