//! Language equivalence via canonical minimal automata.

use super::minimize::minimize;
use crate::core::{Automaton, State, Symbol};

/// Check whether two automata accept exactly the same strings.
///
/// Both sides are minimized; minimization numbers states canonically, so
/// equal languages give equal tables. Alphabet symbols that no transition
/// uses do not affect the outcome.
///
/// # Example
///
/// ```
/// use nerode::builder::from_triples;
/// use nerode::ops::equivalence::equivalent;
///
/// // (ab)* written two ways
/// let small = from_triples([(0, 'a', 1), (1, 'b', 0)], 0, [0]).unwrap();
/// let large = from_triples(
///     [("s", 'a', "x"), ("x", 'b', "t"), ("t", 'a', "y"), ("y", 'b', "t")],
///     "s",
///     ["s", "t"],
/// )
/// .unwrap();
///
/// assert!(equivalent(&small, &large));
/// ```
pub fn equivalent<S, T, C>(left: &Automaton<S, C>, right: &Automaton<T, C>) -> bool
where
    S: State,
    T: State,
    C: Symbol,
{
    let left = minimize(left);
    let right = minimize(right);

    left.states() == right.states()
        && left.accepting() == right.accepting()
        && left.transitions().eq(right.transitions())
}
