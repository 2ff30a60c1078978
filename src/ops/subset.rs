//! Subset construction (NFA to DFA).
//!
//! Each state of the result is a [`StateSet`] of original states. The state
//! space is bounded by `2^|Q|` in the worst case; that blow-up is inherent to
//! the construction.

use crate::core::{Automaton, State, StateSet, Symbol};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::debug;

/// Convert an automaton into an equivalent deterministic one.
///
/// Discovery starts from `{q0}` and only follows defined moves, so the
/// result contains reachable states only. A composite state with no
/// destination on a symbol gets no transition for it. A composite state is
/// accepting iff it contains an accepting original state.
///
/// # Example
///
/// ```
/// use nerode::builder::from_triples;
/// use nerode::core::StateSet;
///
/// let nfa = from_triples([(0, 'a', 0), (0, 'a', 1)], 0, [1]).unwrap();
/// let dfa = nfa.to_dfa();
///
/// let both: StateSet<i32> = [0, 1].into_iter().collect();
/// assert!(dfa.is_deterministic());
/// assert!(dfa.states().contains(&both));
/// assert!(dfa.is_accepting(&both));
/// ```
pub fn to_dfa<S: State, C: Symbol>(automaton: &Automaton<S, C>) -> Automaton<StateSet<S>, C> {
    let start = StateSet::singleton(automaton.start().clone());

    let mut states = BTreeSet::from([start.clone()]);
    let mut transitions = BTreeMap::new();
    let mut worklist = VecDeque::from([start.clone()]);

    while let Some(current) = worklist.pop_front() {
        for symbol in automaton.alphabet() {
            let next: StateSet<S> = current
                .iter()
                .flat_map(|state| automaton.transition(state, symbol).targets())
                .cloned()
                .collect();

            if next.is_empty() {
                continue;
            }

            if states.insert(next.clone()) {
                worklist.push_back(next.clone());
            }
            transitions.insert((current.clone(), symbol.clone()), BTreeSet::from([next]));
        }
    }

    let accepting = states
        .iter()
        .filter(|set| set.intersects(automaton.accepting()))
        .cloned()
        .collect();

    debug!(
        source_states = automaton.state_count(),
        dfa_states = states.len(),
        "subset construction finished"
    );

    Automaton::from_parts(
        states,
        automaton.alphabet().clone(),
        transitions,
        start,
        accepting,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{from_triples, AutomatonBuilder};

    fn set(members: &[u32]) -> StateSet<u32> {
        members.iter().copied().collect()
    }

    #[test]
    fn subset_construction_merges_branches() {
        // 0 -a-> {1, 2}, 1 -b-> 3, 2 -b-> 3 (final)
        let nfa = from_triples([(0, 'a', 1), (0, 'a', 2), (1, 'b', 3), (2, 'b', 3)], 0, [3])
            .unwrap();

        let dfa = to_dfa(&nfa);

        assert_eq!(dfa.start(), &set(&[0]));
        assert_eq!(
            dfa.states(),
            &BTreeSet::from([set(&[0]), set(&[1, 2]), set(&[3])])
        );
        assert_eq!(dfa.accepting(), &BTreeSet::from([set(&[3])]));
        assert_eq!(dfa.transition_count(), 2);
    }

    #[test]
    fn empty_unions_leave_no_transition() {
        let nfa = from_triples([(0, 'a', 1), (1, 'b', 1)], 0, [1]).unwrap();
        let dfa = to_dfa(&nfa);

        assert!(!dfa.transition(&set(&[0]), &'b').is_defined());
        assert!(dfa.transition(&set(&[1]), &'b').is_defined());
    }

    #[test]
    fn unreachable_states_are_never_discovered() {
        let nfa = AutomatonBuilder::new()
            .states([0, 1, 9])
            .symbol('a')
            .start(0)
            .accepting(9)
            .transition(0, 'a', 1)
            .transition(9, 'a', 0)
            .build()
            .unwrap();

        let dfa = to_dfa(&nfa);

        assert_eq!(dfa.state_count(), 2);
        assert!(dfa.accepting().is_empty());
    }

    #[test]
    fn start_state_can_be_accepting() {
        let nfa = from_triples([(0, 'a', 0)], 0, [0]).unwrap();
        let dfa = to_dfa(&nfa);

        assert!(dfa.is_accepting(&set(&[0])));
        assert!(dfa.accepts(&[]));
    }

    #[test]
    fn exponential_family_reaches_every_subset() {
        // "the third symbol from the end is a": the classic 2^n blow-up
        let nfa = from_triples(
            [
                (0, 'a', 0),
                (0, 'b', 0),
                (0, 'a', 1),
                (1, 'a', 2),
                (1, 'b', 2),
                (2, 'a', 3),
                (2, 'b', 3),
            ],
            0,
            [3],
        )
        .unwrap();

        let dfa = to_dfa(&nfa);

        assert_eq!(dfa.state_count(), 8);
        assert!(dfa.accepts(&['a', 'b', 'b']));
        assert!(!dfa.accepts(&['b', 'a', 'b', 'b', 'b']));
    }

    #[test]
    fn determinizing_twice_nests_composite_states() {
        let nfa = from_triples([(0, 'a', 0), (0, 'a', 1)], 0, [1]).unwrap();
        let twice = to_dfa(&to_dfa(&nfa));

        assert_eq!(twice.state_count(), 2);
        assert_eq!(twice.start(), &StateSet::singleton(set(&[0])));
    }
}
