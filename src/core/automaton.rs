//! The immutable automaton value.
//!
//! An [`Automaton`] is the tuple `(Q, Σ, δ, q0, F)`. It is built once through
//! [`AutomatonBuilder`](crate::builder::AutomatonBuilder), which rejects
//! malformed descriptions, and is never mutated afterwards. Every operation
//! returns a new automaton.

use super::run::{Run, RunStep};
use super::state::{State, StateSet, Symbol};
use crate::builder::{AutomatonBuilder, BuildError};
use crate::ops;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of looking up `δ(state, symbol)`.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition<'a, S: State> {
    /// No transition is defined for the pair; a run dies here.
    Undefined,
    /// The pair has at least one destination.
    Defined(&'a BTreeSet<S>),
}

impl<S: State> Clone for Transition<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: State> Copy for Transition<'_, S> {}

impl<'a, S: State> Transition<'a, S> {
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Number of destinations (0 when undefined).
    pub fn fanout(&self) -> usize {
        match self {
            Self::Undefined => 0,
            Self::Defined(targets) => targets.len(),
        }
    }

    /// Iterate over the destinations.
    pub fn targets(self) -> impl Iterator<Item = &'a S> + 'a {
        let targets = match self {
            Self::Undefined => None,
            Self::Defined(targets) => Some(targets),
        };
        targets.into_iter().flatten()
    }
}

/// A finite automaton, possibly nondeterministic.
///
/// # Example
///
/// ```rust
/// use nerode::builder::AutomatonBuilder;
///
/// // Strings over {a, b} that end in "ab"
/// let nfa = AutomatonBuilder::new()
///     .states(["s", "a", "ab"])
///     .alphabet(['a', 'b'])
///     .start("s")
///     .accepting("ab")
///     .transitions("s", 'a', ["s", "a"])
///     .transition("s", 'b', "s")
///     .transition("a", 'b', "ab")
///     .build()
///     .unwrap();
///
/// assert!(!nfa.is_deterministic());
/// assert!(nfa.accepts(&['b', 'a', 'b']));
/// assert!(!nfa.accepts(&['a', 'b', 'a']));
///
/// let minimal = nfa.minimize();
/// assert_eq!(minimal.state_count(), 3);
/// assert!(minimal.accepts(&['b', 'a', 'b']));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "AutomatonDescription<S, C>",
    into = "AutomatonDescription<S, C>",
    bound(
        serialize = "S: Serialize, C: Serialize",
        deserialize = "S: Deserialize<'de>, C: Deserialize<'de>"
    )
)]
pub struct Automaton<S: State, C: Symbol> {
    states: BTreeSet<S>,
    alphabet: BTreeSet<C>,
    transitions: BTreeMap<(S, C), BTreeSet<S>>,
    start: S,
    accepting: BTreeSet<S>,
}

impl<S: State, C: Symbol> Automaton<S, C> {
    /// Assemble an automaton without validation.
    ///
    /// Callers must uphold the well-formedness invariants and must not store
    /// empty destination sets.
    pub(crate) fn from_parts(
        states: BTreeSet<S>,
        alphabet: BTreeSet<C>,
        transitions: BTreeMap<(S, C), BTreeSet<S>>,
        start: S,
        accepting: BTreeSet<S>,
    ) -> Self {
        debug_assert!(transitions.values().all(|targets| !targets.is_empty()));
        Self {
            states,
            alphabet,
            transitions,
            start,
            accepting,
        }
    }

    pub fn states(&self) -> &BTreeSet<S> {
        &self.states
    }

    pub fn alphabet(&self) -> &BTreeSet<C> {
        &self.alphabet
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    pub fn accepting(&self) -> &BTreeSet<S> {
        &self.accepting
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of `(state, symbol, destination)` triples.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(BTreeSet::len).sum()
    }

    /// Look up `δ(state, symbol)`.
    pub fn transition(&self, state: &S, symbol: &C) -> Transition<'_, S> {
        // BTreeMap lookup needs an owned tuple key
        match self.transitions.get(&(state.clone(), symbol.clone())) {
            Some(targets) => Transition::Defined(targets),
            None => Transition::Undefined,
        }
    }

    /// Iterate over every defined `(state, symbol) -> destinations` entry.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &C, &BTreeSet<S>)> + '_ {
        self.transitions
            .iter()
            .map(|((state, symbol), targets)| (state, symbol, targets))
    }

    /// Simulate the automaton on `word` starting from `q0`.
    pub fn run<'w, I>(&self, word: I) -> Run<S, C>
    where
        I: IntoIterator<Item = &'w C>,
        C: 'w,
    {
        self.run_from(&self.start, word)
    }

    /// Simulate the automaton on `word` starting from an arbitrary state.
    ///
    /// All nondeterministic branches are followed at once. A symbol outside
    /// the alphabet, or one with no transition from any active state,
    /// leaves the run with no active states.
    pub fn run_from<'w, I>(&self, state: &S, word: I) -> Run<S, C>
    where
        I: IntoIterator<Item = &'w C>,
        C: 'w,
    {
        let initial = BTreeSet::from([state.clone()]);
        let mut steps: Vec<RunStep<S, C>> = Vec::new();
        for symbol in word {
            let current = steps.last().map_or(&initial, |step| &step.active);
            let active = self.step(current, symbol);
            steps.push(RunStep {
                symbol: symbol.clone(),
                active,
            });
        }
        Run::from_steps(initial, steps)
    }

    /// States reachable from any of `active` on `symbol`.
    fn step(&self, active: &BTreeSet<S>, symbol: &C) -> BTreeSet<S> {
        active
            .iter()
            .flat_map(|current| self.transition(current, symbol).targets())
            .cloned()
            .collect()
    }

    /// Check whether the automaton accepts `word`.
    pub fn accepts<'w, I>(&self, word: I) -> bool
    where
        I: IntoIterator<Item = &'w C>,
        C: 'w,
    {
        self.accepts_from(&self.start, word)
    }

    /// Check whether `word` leads from `state` to an accepting state.
    pub fn accepts_from<'w, I>(&self, state: &S, word: I) -> bool
    where
        I: IntoIterator<Item = &'w C>,
        C: 'w,
    {
        let mut active = BTreeSet::from([state.clone()]);
        for symbol in word {
            if active.is_empty() {
                return false;
            }
            active = self.step(&active, symbol);
        }
        active.iter().any(|reached| self.is_accepting(reached))
    }

    /// See [`ops::determinism::is_deterministic`].
    pub fn is_deterministic(&self) -> bool {
        ops::determinism::is_deterministic(self)
    }

    /// See [`ops::subset::to_dfa`].
    pub fn to_dfa(&self) -> Automaton<StateSet<S>, C> {
        ops::subset::to_dfa(self)
    }

    /// See [`ops::reachability::remove_unreachable`].
    pub fn remove_unreachable(&self) -> Automaton<S, C> {
        ops::reachability::remove_unreachable(self)
    }

    /// See [`ops::minimize::minimize`].
    pub fn minimize(&self) -> Automaton<usize, C> {
        ops::minimize::minimize(self)
    }

    /// See [`ops::complete::complete`].
    pub fn complete(&self, sink: S) -> Result<Automaton<S, C>, BuildError> {
        ops::complete::complete(self, sink)
    }
}

/// One row of a transition table: `δ(from, symbol) = to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry<S, C> {
    pub from: S,
    pub symbol: C,
    pub to: Vec<S>,
}

/// Flat, serializable description of an automaton.
///
/// This is the wire shape of [`Automaton`]. Deserializing an automaton goes
/// through [`AutomatonBuilder`], so malformed descriptions are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDescription<S, C> {
    pub states: Vec<S>,
    pub alphabet: Vec<C>,
    pub transitions: Vec<TransitionEntry<S, C>>,
    pub start: S,
    pub accepting: Vec<S>,
}

impl<S: State, C: Symbol> From<Automaton<S, C>> for AutomatonDescription<S, C> {
    fn from(automaton: Automaton<S, C>) -> Self {
        let transitions = automaton
            .transitions
            .into_iter()
            .map(|((from, symbol), targets)| TransitionEntry {
                from,
                symbol,
                to: targets.into_iter().collect(),
            })
            .collect();

        Self {
            states: automaton.states.into_iter().collect(),
            alphabet: automaton.alphabet.into_iter().collect(),
            transitions,
            start: automaton.start,
            accepting: automaton.accepting.into_iter().collect(),
        }
    }
}

impl<S: State, C: Symbol> TryFrom<AutomatonDescription<S, C>> for Automaton<S, C> {
    type Error = BuildError;

    fn try_from(description: AutomatonDescription<S, C>) -> Result<Self, Self::Error> {
        let mut builder = AutomatonBuilder::new()
            .states(description.states)
            .alphabet(description.alphabet)
            .start(description.start)
            .accepting_states(description.accepting);

        for entry in description.transitions {
            builder = builder.transitions(entry.from, entry.symbol, entry.to);
        }

        builder.build()
    }
}
