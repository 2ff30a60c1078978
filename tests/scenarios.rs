//! End-to-end pipeline scenarios.

use nerode::automaton;
use nerode::builder::{AutomatonBuilder, BuildError, Violation};
use nerode::core::{Automaton, StateSet};
use nerode::snapshot::{Snapshot, Stage};

fn word(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn binary_counter() -> Automaton<&'static str, char> {
    automaton! {
        states: ["q0", "q1", "q2", "q3", "q4", "q5"],
        alphabet: ['0', '1'],
        start: "q0",
        accepting: ["q4", "q5"],
        transitions: {
            ("q0", '0') => ["q1"],
            ("q0", '1') => ["q2"],
            ("q1", '0') => ["q4"],
            ("q1", '1') => ["q2"],
            ("q2", '0') => ["q3"],
            ("q2", '1') => ["q0"],
            ("q3", '0') => ["q5"],
            ("q3", '1') => ["q2"],
            ("q4", '0') => ["q5"],
            ("q4", '1') => ["q5"],
            ("q5", '0') => ["q4"],
            ("q5", '1') => ["q4"],
        }
    }
    .unwrap()
}

#[test]
fn binary_counter_verdicts_survive_minimization() {
    let original = binary_counter();
    let minimal = original.minimize();

    assert_eq!(minimal.state_count(), 3);
    for text in ["0", "1", "00", "11", "010101"] {
        assert_eq!(
            original.accepts(&word(text)),
            minimal.accepts(&word(text)),
            "verdicts differ on {text:?}"
        );
    }

    assert!(!minimal.accepts(&word("0")));
    assert!(!minimal.accepts(&word("1")));
    assert!(minimal.accepts(&word("00")));
    assert!(!minimal.accepts(&word("11")));
    assert!(!minimal.accepts(&word("010101")));
}

#[test]
fn pipeline_stages_never_touch_their_inputs() {
    let nfa = automaton! {
        states: [0, 1, 2, 3],
        alphabet: ['a', 'b'],
        start: 0,
        accepting: [2],
        transitions: {
            (0, 'a') => [0, 1],
            (0, 'b') => [0],
            (1, 'b') => [2],
            (3, 'a') => [2],
        }
    }
    .unwrap();
    let before = nfa.clone();

    let dfa = nfa.to_dfa();
    let trimmed = nfa.remove_unreachable();
    let minimal = nfa.minimize();

    assert_eq!(nfa, before);
    assert!(!nfa.is_deterministic());
    assert!(dfa.is_deterministic());
    assert_eq!(trimmed.state_count(), 3);
    assert_eq!(dfa.start(), &StateSet::singleton(0));
    assert_eq!(minimal.state_count(), 3);
}

#[test]
fn empty_accepting_set_collapses_to_one_state() {
    let automaton = AutomatonBuilder::new()
        .states(["a", "b", "c"])
        .alphabet(['x', 'y'])
        .start("a")
        .transition("a", 'x', "b")
        .transitions("b", 'y', ["a", "c"])
        .build()
        .unwrap();

    let minimal = automaton.minimize();
    assert_eq!(minimal.state_count(), 1);
    assert!(minimal.accepting().is_empty());
}

#[test]
fn all_accepting_states_collapse_only_when_moves_agree() {
    let agreeing = automaton! {
        states: [0, 1],
        alphabet: ['x'],
        start: 0,
        accepting: [0, 1],
        transitions: {
            (0, 'x') => [1],
            (1, 'x') => [0],
        }
    }
    .unwrap();
    assert_eq!(agreeing.minimize().state_count(), 1);

    let disagreeing = automaton! {
        states: [0, 1],
        alphabet: ['x'],
        start: 0,
        accepting: [0, 1],
        transitions: {
            (0, 'x') => [1],
        }
    }
    .unwrap();
    assert_eq!(disagreeing.minimize().state_count(), 2);
}

#[test]
fn malformed_descriptions_are_rejected_with_every_violation() {
    let result = automaton! {
        states: ["p"],
        alphabet: ['x'],
        start: "p",
        accepting: ["r"],
        transitions: {
            ("p", 'y') => ["q"],
        }
    };

    let Err(BuildError::Malformed(violations)) = result else {
        panic!("expected a malformed description");
    };
    assert_eq!(violations.len(), 3);
    assert!(violations.contains(&Violation::AcceptingNotDeclared {
        state: "\"r\"".to_string()
    }));
}

#[test]
fn snapshots_carry_each_stage() {
    let original = binary_counter();
    let minimal = original.minimize();

    let source = Snapshot::new(Stage::Source, original.clone());
    let stored = Snapshot::new(Stage::Minimized, minimal.clone());

    let json = stored.to_json().unwrap();
    let restored = Snapshot::<usize, char>::from_json(&json).unwrap();

    assert_ne!(source.id, stored.id);
    assert_eq!(restored.automaton, minimal);
    assert!(restored.automaton.accepts(&word("100")));
}
