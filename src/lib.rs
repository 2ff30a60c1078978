//! Nerode: determinization and minimization of finite automata
//!
//! Nerode takes an explicitly described, possibly nondeterministic finite
//! automaton and turns it into smaller equivalent ones. Every operation is a
//! pure function from an immutable automaton to a new immutable automaton.
//!
//! # Core Concepts
//!
//! - **Automaton**: `(Q, Σ, δ, q0, F)`, validated once at build time
//! - **Subset construction**: NFA to DFA over composite `StateSet` states
//! - **Reachability trim**: drops states the start state cannot reach
//! - **Partition refinement**: collapses Myhill–Nerode equivalent states
//!
//! # Example
//!
//! ```rust
//! use nerode::automaton;
//!
//! let counter = automaton! {
//!     states: ["q0", "q1", "q2", "q3", "q4", "q5"],
//!     alphabet: ['0', '1'],
//!     start: "q0",
//!     accepting: ["q4", "q5"],
//!     transitions: {
//!         ("q0", '0') => ["q1"], ("q0", '1') => ["q2"],
//!         ("q1", '0') => ["q4"], ("q1", '1') => ["q2"],
//!         ("q2", '0') => ["q3"], ("q2", '1') => ["q0"],
//!         ("q3", '0') => ["q5"], ("q3", '1') => ["q2"],
//!         ("q4", '0') => ["q5"], ("q4", '1') => ["q5"],
//!         ("q5", '0') => ["q4"], ("q5", '1') => ["q4"],
//!     }
//! }
//! .unwrap();
//!
//! let minimal = counter.minimize();
//! assert_eq!(minimal.state_count(), 3);
//!
//! for word in ["0", "1", "00", "11", "010101"] {
//!     let word: Vec<char> = word.chars().collect();
//!     assert_eq!(counter.accepts(&word), minimal.accepts(&word));
//! }
//! ```

pub mod builder;
pub mod core;
pub mod ops;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use crate::core::{Automaton, State, StateSet, Symbol, Transition};
pub use snapshot::{Snapshot, SnapshotError, Stage};
