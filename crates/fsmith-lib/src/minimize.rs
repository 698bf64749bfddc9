//! Moore partition refinement: DFA to minimal DFA.
//!
//! The partial transition function is made total with an explicit dead
//! state, so "no transition" is a destination like any other. Blocks are
//! split by the block each member reaches on every symbol until the number
//! of blocks stops changing.

use fsmith_core::{StateId, StateSet};
use indexmap::IndexMap;

use crate::automaton::{Automaton, Dfa};

/// A block of states, as indices into the completed transition table.
type Block = Vec<usize>;

/// Build the minimal DFA recognizing the same language as `dfa`.
///
/// State 0 is the block holding the start state; other blocks follow in
/// order of their smallest member. The dead block is dropped (unless it
/// holds the start state) and transitions into it are left undefined. Each
/// output state's subset lists the input states it merges.
pub fn minimize(dfa: &Dfa) -> Dfa {
    let table = Table::complete(dfa);
    log::trace!("minimize: {} states + dead", dfa.state_count());

    let mut partition = table.initial_partition();
    trace_partition("initial", &partition);

    loop {
        let refined = table.refine(&partition);
        trace_partition("refined", &refined);
        let stable = refined.len() == partition.len();
        partition = refined;
        if stable {
            break;
        }
    }

    let minimal = table.rebuild(dfa, &partition);
    log::debug!(
        "minimize: {} DFA states -> {} states",
        dfa.state_count(),
        minimal.state_count()
    );
    minimal
}

/// Total transition table over `n + 1` rows, row `n` being the dead state.
struct Table {
    symbols: Vec<char>,
    rows: Vec<Vec<usize>>,
    accept: Vec<bool>,
}

impl Table {
    fn complete(dfa: &Dfa) -> Self {
        let symbols: Vec<char> = dfa.alphabet().iter().copied().collect();
        let dead = dfa.state_count();

        let mut rows: Vec<Vec<usize>> = dfa
            .iter()
            .map(|(_, state)| {
                symbols
                    .iter()
                    .map(|&c| state.target(c).map_or(dead, |t| t as usize))
                    .collect()
            })
            .collect();
        rows.push(vec![dead; symbols.len()]);

        let mut accept: Vec<bool> = dfa.iter().map(|(_, s)| s.is_accept()).collect();
        accept.push(false);

        Self {
            symbols,
            rows,
            accept,
        }
    }

    fn dead(&self) -> usize {
        self.rows.len() - 1
    }

    /// Accepting states, then non-accepting states with the dead state.
    fn initial_partition(&self) -> Vec<Block> {
        let (accepting, rejecting): (Block, Block) =
            (0..self.rows.len()).partition(|&s| self.accept[s]);
        [accepting, rejecting]
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect()
    }

    /// Split every block by the blocks its members reach on each symbol.
    fn refine(&self, partition: &[Block]) -> Vec<Block> {
        let block_of = block_index(partition, self.rows.len());
        let mut refined = Vec::with_capacity(partition.len());

        for block in partition {
            let mut groups: IndexMap<Vec<usize>, Block> = IndexMap::new();
            for &state in block {
                let signature = self.rows[state].iter().map(|&t| block_of[t]).collect();
                groups.entry(signature).or_default().push(state);
            }
            refined.extend(groups.into_values());
        }

        refined
    }

    fn rebuild(&self, dfa: &Dfa, partition: &[Block]) -> Dfa {
        let dead = self.dead();
        let start = dfa.start() as usize;
        let block_of = block_index(partition, self.rows.len());
        let dead_block = block_of[dead];
        let start_block = block_of[start];

        // Blocks in output order; `partition` blocks are already sorted
        // internally, so `block[0]` is the smallest member.
        let mut order: Vec<usize> = (0..partition.len())
            .filter(|&b| b == start_block || b != dead_block)
            .collect();
        order.sort_by_key(|&b| (b != start_block, partition[b][0]));

        let mut new_id = vec![None; partition.len()];
        let mut minimal = Dfa::new(dfa.alphabet().clone());
        for &b in &order {
            let members: StateSet = partition[b]
                .iter()
                .filter(|&&s| s != dead)
                .map(|&s| s as StateId)
                .collect();
            let accept = self.accept[partition[b][0]];
            new_id[b] = Some(minimal.add_state(members, accept));
        }
        if let Some(id) = new_id[start_block] {
            minimal.set_start(id);
        }

        for &b in &order {
            let Some(source) = new_id[b] else { continue };
            let representative = partition[b][0];
            for (i, &symbol) in self.symbols.iter().enumerate() {
                let target_block = block_of[self.rows[representative][i]];
                if target_block == dead_block {
                    continue;
                }
                if let Some(target) = new_id[target_block] {
                    minimal.set_transition(source, symbol, target);
                }
            }
        }

        minimal
    }
}

fn block_index(partition: &[Block], len: usize) -> Vec<usize> {
    let mut block_of = vec![0; len];
    for (b, block) in partition.iter().enumerate() {
        for &state in block {
            block_of[state] = b;
        }
    }
    block_of
}

fn trace_partition(context: &str, partition: &[Block]) {
    log::trace!("{context} partition: {partition:?}");
}
