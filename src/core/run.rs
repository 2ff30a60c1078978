//! Simulation traces.
//!
//! A [`Run`] records the set of active states after each consumed symbol.
//! Runs are immutable: [`Run::record`] returns a new run with one more step.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One consumed symbol and the states active after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStep<S: State, C: Symbol> {
    pub symbol: C,
    pub active: BTreeSet<S>,
}

/// Trace of a simulation over a word.
///
/// # Example
///
/// ```rust
/// use nerode::automaton;
///
/// let dfa = automaton! {
///     states: ["even", "odd"],
///     alphabet: ['1'],
///     start: "even",
///     accepting: ["even"],
///     transitions: {
///         ("even", '1') => ["odd"],
///         ("odd", '1') => ["even"],
///     }
/// }
/// .unwrap();
///
/// let run = dfa.run(&['1', '1', '1']);
/// assert_eq!(run.len(), 3);
/// assert!(run.active().contains("odd"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run<S: State, C: Symbol> {
    initial: BTreeSet<S>,
    steps: Vec<RunStep<S, C>>,
}

impl<S: State, C: Symbol> Run<S, C> {
    /// Start a run with the given active states and no steps.
    pub fn new(initial: BTreeSet<S>) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    pub(crate) fn from_steps(initial: BTreeSet<S>, steps: Vec<RunStep<S, C>>) -> Self {
        Self { initial, steps }
    }

    /// Record a step, returning a new run.
    pub fn record(&self, symbol: C, active: BTreeSet<S>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(RunStep { symbol, active });
        Self {
            initial: self.initial.clone(),
            steps,
        }
    }

    /// States active after the last step.
    pub fn active(&self) -> &BTreeSet<S> {
        self.steps
            .last()
            .map_or(&self.initial, |step| &step.active)
    }

    /// Active state sets in order, starting with the initial one.
    pub fn path(&self) -> Vec<&BTreeSet<S>> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|step| &step.active))
            .collect()
    }

    /// True once no state is active; no continuation can be accepted.
    pub fn is_stuck(&self) -> bool {
        self.active().is_empty()
    }

    pub fn steps(&self) -> &[RunStep<S, C>] {
        &self.steps
    }

    /// Number of consumed symbols.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_run_has_initial_states_only() {
        let run: Run<u8, char> = Run::new(BTreeSet::from([0]));
        assert!(run.is_empty());
        assert_eq!(run.active(), &BTreeSet::from([0]));
        assert_eq!(run.path().len(), 1);
    }

    #[test]
    fn record_is_immutable() {
        let run: Run<u8, char> = Run::new(BTreeSet::from([0]));
        let next = run.record('a', BTreeSet::from([1, 2]));

        assert_eq!(run.len(), 0);
        assert_eq!(next.len(), 1);
        assert_eq!(next.active(), &BTreeSet::from([1, 2]));
    }

    #[test]
    fn path_lists_every_step() {
        let run: Run<u8, char> = Run::new(BTreeSet::from([0]))
            .record('a', BTreeSet::from([1]))
            .record('b', BTreeSet::from([2]));

        let path = run.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[2], &BTreeSet::from([2]));
        assert_eq!(run.steps()[1].symbol, 'b');
    }

    #[test]
    fn empty_active_set_is_stuck() {
        let run: Run<u8, char> = Run::new(BTreeSet::from([0])).record('z', BTreeSet::new());
        assert!(run.is_stuck());
    }
}
