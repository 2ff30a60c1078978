//! Well-formedness checks using Validation.
//!
//! Checks accumulate, so a single build reports every broken invariant.

use crate::builder::error::Violation;
use crate::core::{Automaton, State, Symbol};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<Violation>>;

fn require(holds: bool, violation: impl FnOnce() -> Violation) -> Check {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn render<T: std::fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Check every invariant of a well-formed automaton:
/// `q0 ∈ Q`, `F ⊆ Q`, and every transition uses declared states and symbols.
pub(crate) fn validate<S: State, C: Symbol>(automaton: &Automaton<S, C>) -> Check {
    let states = automaton.states();
    let mut checks = Vec::new();

    let start = automaton.start();
    checks.push(require(states.contains(start), || {
        Violation::StartNotDeclared {
            start: render(start),
        }
    }));

    for state in automaton.accepting() {
        checks.push(require(states.contains(state), || {
            Violation::AcceptingNotDeclared {
                state: render(state),
            }
        }));
    }

    for (from, symbol, targets) in automaton.transitions() {
        checks.push(require(states.contains(from), || Violation::UnknownSource {
            state: render(from),
            symbol: render(symbol),
        }));
        checks.push(require(automaton.alphabet().contains(symbol), || {
            Violation::UnknownSymbol {
                state: render(from),
                symbol: render(symbol),
            }
        }));
        for to in targets {
            checks.push(require(states.contains(to), || {
                Violation::UnknownDestination {
                    from: render(from),
                    symbol: render(symbol),
                    to: render(to),
                }
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
