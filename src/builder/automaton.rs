//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::builder::validate::validate;
use crate::core::{Automaton, State, Symbol};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;

/// Builder for constructing automata with a fluent API.
///
/// States and symbols must be declared explicitly; [`build`](Self::build)
/// rejects transitions, start or accepting states that refer to anything
/// undeclared.
pub struct AutomatonBuilder<S: State, C: Symbol> {
    states: BTreeSet<S>,
    alphabet: BTreeSet<C>,
    transitions: BTreeMap<(S, C), BTreeSet<S>>,
    start: Option<S>,
    accepting: BTreeSet<S>,
}

impl<S: State, C: Symbol> AutomatonBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: BTreeSet::new(),
            alphabet: BTreeSet::new(),
            transitions: BTreeMap::new(),
            start: None,
            accepting: BTreeSet::new(),
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: S) -> Self {
        self.states.insert(state);
        self
    }

    /// Declare several states at once.
    pub fn states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a symbol to the alphabet.
    pub fn symbol(mut self, symbol: C) -> Self {
        self.alphabet.insert(symbol);
        self
    }

    /// Add several symbols to the alphabet.
    pub fn alphabet<I: IntoIterator<Item = C>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Add `to` to `δ(from, symbol)`.
    pub fn transition(self, from: S, symbol: C, to: S) -> Self {
        self.transitions(from, symbol, [to])
    }

    /// Add every destination in `to` to `δ(from, symbol)`.
    ///
    /// An empty `to` leaves the pair undefined.
    pub fn transitions<I: IntoIterator<Item = S>>(mut self, from: S, symbol: C, to: I) -> Self {
        let mut targets = to.into_iter().peekable();
        if targets.peek().is_some() {
            self.transitions
                .entry((from, symbol))
                .or_default()
                .extend(targets);
        }
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, state: S) -> Self {
        self.accepting.insert(state);
        self
    }

    /// Mark several states as accepting.
    pub fn accepting_states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Build the automaton.
    /// Returns an error if required parts are missing or any invariant is broken.
    pub fn build(self) -> Result<Automaton<S, C>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        if self.alphabet.is_empty() {
            return Err(BuildError::EmptyAlphabet);
        }

        let automaton = Automaton::from_parts(
            self.states,
            self.alphabet,
            self.transitions,
            start,
            self.accepting,
        );

        match validate(&automaton) {
            Validation::Success(_) => Ok(automaton),
            Validation::Failure(violations) => Err(BuildError::Malformed(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

impl<S: State, C: Symbol> Default for AutomatonBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::error::Violation;
    use crate::core::Transition;

    #[test]
    fn builder_requires_start_state() {
        let result = AutomatonBuilder::<&str, char>::new()
            .state("q0")
            .symbol('a')
            .build();

        assert!(matches!(result, Err(BuildError::MissingStartState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = AutomatonBuilder::<&str, char>::new()
            .symbol('a')
            .start("q0")
            .build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_requires_alphabet() {
        let result = AutomatonBuilder::<&str, char>::new()
            .state("q0")
            .start("q0")
            .build();

        assert!(matches!(result, Err(BuildError::EmptyAlphabet)));
    }

    #[test]
    fn builder_rejects_undeclared_start() {
        let result = AutomatonBuilder::<&str, char>::new()
            .state("q0")
            .symbol('a')
            .start("q9")
            .build();

        match result {
            Err(BuildError::Malformed(violations)) => {
                assert_eq!(
                    violations,
                    vec![Violation::StartNotDeclared {
                        start: "\"q9\"".to_string()
                    }]
                );
            }
            other => panic!("Expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn builder_reports_every_violation() {
        let result = AutomatonBuilder::<&str, char>::new()
            .states(["q0", "q1"])
            .symbol('a')
            .start("q0")
            .accepting("q7")
            .transition("q0", 'b', "q1")
            .transition("q1", 'a', "q8")
            .build();

        match result {
            Err(BuildError::Malformed(violations)) => assert_eq!(violations.len(), 3),
            other => panic!("Expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn transitions_merge_destinations() {
        let automaton = AutomatonBuilder::new()
            .states([0, 1, 2])
            .symbol('a')
            .start(0)
            .transition(0, 'a', 1)
            .transitions(0, 'a', [2, 1])
            .build()
            .unwrap();

        assert_eq!(automaton.transition(&0, &'a').fanout(), 2);
        assert_eq!(automaton.transition_count(), 2);
    }

    #[test]
    fn empty_destination_list_leaves_pair_undefined() {
        let automaton = AutomatonBuilder::<u8, char>::new()
            .state(0)
            .symbol('a')
            .start(0)
            .transitions(0, 'a', [])
            .build()
            .unwrap();

        assert_eq!(automaton.transition(&0, &'a'), Transition::Undefined);
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .alphabet(['0', '1'])
            .start("q0")
            .accepting_states(["q1"])
            .transition("q0", '1', "q1")
            .transition("q1", '0', "q0")
            .build()
            .unwrap();

        assert_eq!(automaton.start(), &"q0");
        assert!(automaton.is_accepting(&"q1"));
        assert_eq!(automaton.alphabet().len(), 2);
    }
}
