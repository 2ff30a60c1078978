//! Partition-refinement minimization.
//!
//! The input is first made deterministic and reachable-only. Refinement then
//! starts from the accepting / non-accepting split and repeatedly splits
//! blocks by their predecessors on each symbol until the partition is stable,
//! at which point blocks are exactly the Myhill–Nerode classes.
//!
//! Partial transition functions: an undefined `(state, symbol)` pair moves to
//! an implicit dead sink. The sink starts in the non-accepting block and is
//! refined like any other state. The block that ends up holding it is the
//! dead class (states from which nothing is accepted); it is left out of the
//! result together with every transition into it. The result is therefore
//! the unique minimal partial automaton for the language.

use super::determinism::is_deterministic;
use super::reachability::remove_unreachable;
use super::subset::to_dfa;
use crate::core::{Automaton, State, Symbol};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use tracing::{debug, trace};

/// Minimize an automaton.
///
/// Nondeterministic input goes through subset construction first; otherwise
/// unreachable states are removed. States of the result are block numbers:
/// `0` is the start block and the rest are numbered in breadth-first order,
/// following symbols in ascending order. Language-equivalent inputs thus
/// minimize to equal automata.
///
/// # Example
///
/// ```
/// use nerode::automaton;
///
/// // q1 and q2 behave identically
/// let dfa = automaton! {
///     states: ["q0", "q1", "q2", "q3"],
///     alphabet: ['a', 'b'],
///     start: "q0",
///     accepting: ["q3"],
///     transitions: {
///         ("q0", 'a') => ["q1"],
///         ("q0", 'b') => ["q2"],
///         ("q1", 'b') => ["q3"],
///         ("q2", 'b') => ["q3"],
///     }
/// }
/// .unwrap();
///
/// let minimal = dfa.minimize();
/// assert_eq!(minimal.state_count(), 3);
/// assert!(minimal.accepts(&['b', 'b']));
/// assert!(!minimal.accepts(&['a', 'a']));
/// ```
pub fn minimize<S: State, C: Symbol>(automaton: &Automaton<S, C>) -> Automaton<usize, C> {
    if is_deterministic(automaton) {
        refine(&remove_unreachable(automaton))
    } else {
        refine(&to_dfa(automaton))
    }
}

/// Dense, index-based copy of a deterministic automaton completed with a
/// dead sink at index `sink`.
struct Table {
    /// `delta[state][symbol]`; rows exist for the sink too.
    delta: Vec<Vec<usize>>,
    /// `inverse[symbol][target]` lists every source moving to `target`.
    inverse: Vec<Vec<Vec<usize>>>,
    accepting: Vec<bool>,
    start: usize,
    sink: usize,
}

impl Table {
    fn new<S: State, C: Symbol>(dfa: &Automaton<S, C>) -> Self {
        let states: Vec<&S> = dfa.states().iter().collect();
        let index: HashMap<&S, usize> = states
            .iter()
            .enumerate()
            .map(|(i, state)| (*state, i))
            .collect();
        let sink = states.len();
        let width = dfa.alphabet().len();

        let mut delta = vec![vec![sink; width]; sink + 1];
        for (row, state) in states.iter().enumerate() {
            for (column, symbol) in dfa.alphabet().iter().enumerate() {
                if let Some(target) = dfa.transition(state, symbol).targets().next() {
                    delta[row][column] = index[target];
                }
            }
        }

        let mut inverse = vec![vec![Vec::new(); sink + 1]; width];
        for (source, row) in delta.iter().enumerate() {
            for (column, &target) in row.iter().enumerate() {
                inverse[column][target].push(source);
            }
        }

        let mut accepting: Vec<bool> = states.iter().map(|s| dfa.is_accepting(s)).collect();
        accepting.push(false);

        Self {
            delta,
            inverse,
            accepting,
            start: index[dfa.start()],
            sink,
        }
    }

    fn width(&self) -> usize {
        self.inverse.len()
    }
}

/// Blocks of states addressed by stable ids.
struct Partition {
    blocks: Vec<Vec<usize>>,
    block_of: Vec<usize>,
}

impl Partition {
    /// Accepting states versus the rest, dropping an empty side.
    fn initial(accepting: &[bool]) -> Self {
        let (accept, reject): (Vec<usize>, Vec<usize>) =
            (0..accepting.len()).partition(|&state| accepting[state]);

        let blocks: Vec<Vec<usize>> = [accept, reject]
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect();

        let mut block_of = vec![0; accepting.len()];
        for (id, block) in blocks.iter().enumerate() {
            for &state in block {
                block_of[state] = id;
            }
        }

        Self { blocks, block_of }
    }

    /// Move `moved` out of block `id` into a new block and return its id.
    /// `moved` must be a non-empty proper subset of the block.
    fn split(&mut self, id: usize, moved: Vec<usize>) -> usize {
        let new_id = self.blocks.len();
        for &state in &moved {
            self.block_of[state] = new_id;
        }
        let block_of = &self.block_of;
        self.blocks[id].retain(|state| block_of[*state] == id);
        self.blocks.push(moved);
        new_id
    }
}

/// Worklist of block ids with constant-time membership.
struct Worklist {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl Worklist {
    fn new(blocks: usize) -> Self {
        Self {
            queue: (0..blocks).collect(),
            queued: vec![true; blocks],
        }
    }

    fn push(&mut self, id: usize) {
        if id >= self.queued.len() {
            self.queued.resize(id + 1, false);
        }
        if !self.queued[id] {
            self.queued[id] = true;
            self.queue.push_back(id);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let id = self.queue.pop_front()?;
        self.queued[id] = false;
        Some(id)
    }

    fn contains(&self, id: usize) -> bool {
        self.queued.get(id).copied().unwrap_or(false)
    }
}

/// Refine the accepting / non-accepting partition to a fixpoint.
fn coarsest_partition(table: &Table) -> Partition {
    let mut partition = Partition::initial(&table.accepting);
    let mut worklist = Worklist::new(partition.blocks.len());

    while let Some(splitter_id) = worklist.pop() {
        let splitter = partition.blocks[splitter_id].clone();

        for symbol in 0..table.width() {
            // Each state has exactly one move per symbol, so predecessors
            // of distinct splitter members never repeat.
            let mut touched: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
            for &target in &splitter {
                for &source in &table.inverse[symbol][target] {
                    touched
                        .entry(partition.block_of[source])
                        .or_default()
                        .push(source);
                }
            }

            for (block_id, inside) in touched {
                let block_len = partition.blocks[block_id].len();
                if inside.len() == block_len {
                    continue;
                }

                let inside_len = inside.len();
                let new_id = partition.split(block_id, inside);
                trace!(block_id, new_id, inside_len, block_len, "split block");

                // A queued block keeps its id, so queuing the new half puts
                // both halves on the worklist. Otherwise only the smaller half
                // is needed.
                if worklist.contains(block_id) || inside_len <= block_len - inside_len {
                    worklist.push(new_id);
                } else {
                    worklist.push(block_id);
                }
            }
        }
    }

    partition
}

fn refine<S: State, C: Symbol>(dfa: &Automaton<S, C>) -> Automaton<usize, C> {
    let table = Table::new(dfa);
    let partition = coarsest_partition(&table);
    let dead = partition.block_of[table.sink];
    let symbols: Vec<&C> = dfa.alphabet().iter().collect();

    let mut number: HashMap<usize, usize> = HashMap::new();
    let mut transitions = BTreeMap::new();
    let mut accepting = BTreeSet::new();

    let start_block = partition.block_of[table.start];
    if start_block != dead {
        number.insert(start_block, 0);
        let mut queue = VecDeque::from([start_block]);

        while let Some(block_id) = queue.pop_front() {
            let from = number[&block_id];
            // All members agree on target blocks, so any member will do.
            let representative = partition.blocks[block_id][0];

            if table.accepting[representative] {
                accepting.insert(from);
            }

            for (column, symbol) in symbols.iter().enumerate() {
                let target_block = partition.block_of[table.delta[representative][column]];
                if target_block == dead {
                    continue;
                }

                let next_number = number.len();
                let to = *number.entry(target_block).or_insert_with(|| {
                    queue.push_back(target_block);
                    next_number
                });
                transitions.insert((from, (*symbol).clone()), BTreeSet::from([to]));
            }
        }
    }

    // An empty language still needs its start state.
    let states: BTreeSet<usize> = (0..number.len().max(1)).collect();

    debug!(
        input_states = dfa.state_count(),
        blocks = partition.blocks.len(),
        minimal_states = states.len(),
        "minimization finished"
    );

    Automaton::from_parts(states, dfa.alphabet().clone(), transitions, 0, accepting)
}

/// Equivalence classes of a deterministic automaton's states.
///
/// Dead states (nothing accepted from them) form no class of their own and
/// are returned separately. Returns `None` for a nondeterministic automaton;
/// determinize it with [`to_dfa`] first and classify the state sets.
pub fn equivalence_classes<S: State, C: Symbol>(
    dfa: &Automaton<S, C>,
) -> Option<(Vec<BTreeSet<S>>, BTreeSet<S>)> {
    if !is_deterministic(dfa) {
        return None;
    }

    let table = Table::new(dfa);
    let partition = coarsest_partition(&table);
    let dead = partition.block_of[table.sink];
    let states: Vec<&S> = dfa.states().iter().collect();

    let mut classes = Vec::new();
    let mut dead_states = BTreeSet::new();
    for (id, block) in partition.blocks.iter().enumerate() {
        let members: BTreeSet<S> = block
            .iter()
            .filter(|&&state| state != table.sink)
            .map(|&state| states[state].clone())
            .collect();
        if id == dead {
            dead_states = members;
        } else {
            classes.push(members);
        }
    }
    classes.sort();

    Some((classes, dead_states))
}
