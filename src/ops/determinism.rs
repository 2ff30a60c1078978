//! Determinism diagnostic.

use crate::core::{Automaton, State, Symbol};

/// Check whether every `(state, symbol)` pair has at most one destination.
///
/// Undefined pairs are not violations: a partial transition function is
/// still deterministic.
pub fn is_deterministic<S: State, C: Symbol>(automaton: &Automaton<S, C>) -> bool {
    automaton
        .transitions()
        .all(|(_, _, targets)| targets.len() <= 1)
}

/// First `(state, symbol)` pair with more than one destination, if any.
pub fn first_nondeterministic_pair<S: State, C: Symbol>(
    automaton: &Automaton<S, C>,
) -> Option<(&S, &C)> {
    automaton
        .transitions()
        .find(|(_, _, targets)| targets.len() > 1)
        .map(|(state, symbol, _)| (state, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::from_triples;

    #[test]
    fn branching_pair_is_nondeterministic() {
        let nfa = from_triples([(0, 'a', 1), (0, 'a', 2)], 0, [2]).unwrap();

        assert!(!is_deterministic(&nfa));
        assert_eq!(first_nondeterministic_pair(&nfa), Some((&0, &'a')));
    }

    #[test]
    fn partial_function_is_deterministic() {
        let dfa = from_triples([(0, 'a', 1), (1, 'b', 0)], 0, [1]).unwrap();

        assert!(is_deterministic(&dfa));
        assert_eq!(first_nondeterministic_pair(&dfa), None);
    }

    #[test]
    fn subset_construction_result_is_deterministic() {
        let nfa = from_triples([(0, 'a', 0), (0, 'a', 1), (1, 'b', 2)], 0, [2]).unwrap();

        assert!(!is_deterministic(&nfa));
        assert!(is_deterministic(&nfa.to_dfa()));
    }
}
