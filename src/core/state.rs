//! State and symbol identifiers.
//!
//! Automata are generic over the identifiers used for their states and
//! alphabet symbols. Any ordered, hashable, cloneable value qualifies, so
//! callers can use `&str`, `char`, integers or their own enums directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for automaton state identifiers.
///
/// Blanket-implemented for every type with the required bounds. `Ord` keeps
/// state sets ordered, which makes every operation produce the same value
/// for the same input.
///
/// # Example
///
/// ```rust
/// use nerode::core::State;
///
/// fn assert_state<S: State>(_: S) {}
///
/// assert_state("q0");
/// assert_state(7usize);
/// ```
pub trait State: Clone + Eq + Ord + Hash + Debug + Send + Sync {}

impl<T> State for T where T: Clone + Eq + Ord + Hash + Debug + Send + Sync {}

/// Trait for alphabet symbols. Same bounds as [`State`].
pub trait Symbol: Clone + Eq + Ord + Hash + Debug + Send + Sync {}

impl<T> Symbol for T where T: Clone + Eq + Ord + Hash + Debug + Send + Sync {}

/// A composite state: a non-empty group of underlying states.
///
/// Produced by subset construction. Identity is the set itself, so two
/// composite states are equal iff they hold exactly the same members,
/// regardless of insertion order.
///
/// # Example
///
/// ```rust
/// use nerode::core::StateSet;
///
/// let a: StateSet<&str> = ["q1", "q0"].into_iter().collect();
/// let b: StateSet<&str> = ["q0", "q1", "q0"].into_iter().collect();
///
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSet<S: State>(BTreeSet<S>);

impl<S: State> StateSet<S> {
    /// Create a composite state holding a single member.
    pub fn singleton(state: S) -> Self {
        Self(BTreeSet::from([state]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.0.contains(state)
    }

    /// Check whether any member also belongs to `other`.
    pub fn intersects(&self, other: &BTreeSet<S>) -> bool {
        self.0.iter().any(|state| other.contains(state))
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.0.iter()
    }

    pub fn as_set(&self) -> &BTreeSet<S> {
        &self.0
    }

    pub fn into_inner(self) -> BTreeSet<S> {
        self.0
    }
}

impl<S: State> From<BTreeSet<S>> for StateSet<S> {
    fn from(states: BTreeSet<S>) -> Self {
        Self(states)
    }
}

impl<S: State> FromIterator<S> for StateSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, S: State> IntoIterator for &'a StateSet<S> {
    type Item = &'a S;
    type IntoIter = std::collections::btree_set::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: State> Debug for StateSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
