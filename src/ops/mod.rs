//! Pure operations over automata.
//!
//! Every operation takes an automaton by reference and returns a new value;
//! inputs stay usable afterwards. The pipeline is
//! determinize (if needed) → trim → refine:
//!
//! - [`determinism`]: `is_deterministic`
//! - [`subset`]: `to_dfa`, subset construction
//! - [`reachability`]: `remove_unreachable`
//! - [`minimize`]: `minimize`, partition refinement
//! - [`complete`]: explicit sink completion
//! - [`equivalence`]: language equality

pub mod complete;
pub mod determinism;
pub mod equivalence;
pub mod minimize;
pub mod reachability;
pub mod subset;

pub use complete::complete;
pub use determinism::is_deterministic;
pub use equivalence::equivalent;
pub use minimize::minimize;
pub use reachability::remove_unreachable;
pub use subset::to_dfa;
