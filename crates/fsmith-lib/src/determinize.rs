//! Subset construction: NFA to DFA.
//!
//! Each DFA state stands for the epsilon closure of a set of NFA states.
//! States are numbered in discovery order, breadth-first from the start
//! closure, and symbols are tried in ascending order, so the output is
//! deterministic for a given NFA.

use std::collections::VecDeque;

use fsmith_core::{StateId, StateSet};
use indexmap::IndexSet;

use crate::automaton::{Automaton, Dfa, Nfa};
use crate::closure::{advance, epsilon_closure};

/// Build the DFA equivalent to `nfa`.
///
/// Only non-empty subsets become states: a symbol that leads nowhere gets no
/// transition and falls to the implicit dead state. A DFA state accepts iff
/// its subset contains an NFA accept state.
pub fn determinize(nfa: &Nfa) -> Dfa {
    let mut dfa = Dfa::new(nfa.alphabet().clone());
    // Index in `seen` is the DFA state id.
    let mut seen: IndexSet<StateSet> = IndexSet::new();
    let mut worklist: VecDeque<StateId> = VecDeque::new();

    let start = epsilon_closure(nfa, &StateSet::singleton(nfa.start()));
    let start_id = discover(&mut dfa, &mut seen, nfa, start);
    dfa.set_start(start_id);
    worklist.push_back(start_id);

    while let Some(current) = worklist.pop_front() {
        let subset = seen[current as usize].clone();

        for &symbol in nfa.alphabet() {
            let next = advance(nfa, &subset, symbol);
            if next.is_empty() {
                continue;
            }

            let target = match seen.get_index_of(&next) {
                Some(existing) => existing as StateId,
                None => {
                    let id = discover(&mut dfa, &mut seen, nfa, next);
                    worklist.push_back(id);
                    id
                }
            };
            dfa.set_transition(current, symbol, target);
        }
    }

    log::debug!(
        "subset construction: {} NFA states -> {} DFA states",
        nfa.state_count(),
        dfa.state_count()
    );
    dfa
}

fn discover(
    dfa: &mut Dfa,
    seen: &mut IndexSet<StateSet>,
    nfa: &Nfa,
    subset: StateSet,
) -> StateId {
    let accept = subset.intersects(nfa.accept());
    let marker = if accept { " (accept)" } else { "" };
    log::trace!("S{} = {subset}{marker}", seen.len());
    seen.insert(subset.clone());
    dfa.add_state(subset, accept)
}
