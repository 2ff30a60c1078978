//! Minimizing a Binary Counter
//!
//! This example walks a six-state automaton through the whole pipeline.
//!
//! Key concepts:
//! - Building an automaton from a transition table
//! - Determinism check and subset construction
//! - Partition-refinement minimization
//! - Comparing verdicts before and after
//!
//! Run with: cargo run --example minimize_counter

use nerode::automaton;
use nerode::snapshot::{Snapshot, Stage};

fn main() {
    println!("=== Binary Counter Minimization ===\n");

    let counter = automaton! {
        states: ["q0", "q1", "q2", "q3", "q4", "q5"],
        alphabet: ['0', '1'],
        start: "q0",
        accepting: ["q4", "q5"],
        transitions: {
            ("q0", '0') => ["q1"], ("q0", '1') => ["q2"],
            ("q1", '0') => ["q4"], ("q1", '1') => ["q2"],
            ("q2", '0') => ["q3"], ("q2", '1') => ["q0"],
            ("q3", '0') => ["q5"], ("q3", '1') => ["q2"],
            ("q4", '0') => ["q5"], ("q4", '1') => ["q5"],
            ("q5", '0') => ["q4"], ("q5", '1') => ["q4"],
        }
    }
    .unwrap();

    println!("States: {}", counter.state_count());
    println!("Deterministic: {}", counter.is_deterministic());

    let minimal = counter.minimize();
    println!("Minimal states: {}", minimal.state_count());
    for (state, symbol, targets) in minimal.transitions() {
        println!("  ({state}, {symbol}) -> {targets:?}");
    }

    println!("\nVerdicts:");
    for text in ["0", "1", "00", "11", "010101"] {
        let word: Vec<char> = text.chars().collect();
        println!(
            "  {text:>6}: original={} minimal={}",
            counter.accepts(&word),
            minimal.accepts(&word)
        );
    }

    let snapshot = Snapshot::new(Stage::Minimized, minimal);
    println!("\nSnapshot {}:\n{}", snapshot.id, snapshot.to_json().unwrap());

    println!("\n=== Example Complete ===");
}
