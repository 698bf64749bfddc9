//! Membership queries.
//!
//! The whole input must be consumed for a match; there is no prefix or
//! substring search. Input is read as a sequence of `char`s.

use fsmith_core::StateSet;

use crate::automaton::{Automaton, Dfa, Nfa};
use crate::closure::{advance, epsilon_closure};

/// Simulate `nfa` on `input` by tracking the closed set of live states.
pub fn accepts_nfa(nfa: &Nfa, input: &str) -> bool {
    let mut current = epsilon_closure(nfa, &StateSet::singleton(nfa.start()));

    for symbol in input.chars() {
        current = advance(nfa, &current, symbol);
        if current.is_empty() {
            return false;
        }
    }

    current.intersects(nfa.accept())
}

/// Follow `dfa` from its start; a missing transition rejects at once.
pub fn accepts_dfa(dfa: &Dfa, input: &str) -> bool {
    let mut state = dfa.start();

    for symbol in input.chars() {
        match dfa.target(state, symbol) {
            Some(next) => state = next,
            None => return false,
        }
    }

    dfa.is_accept(state)
}

/// Membership query against any automaton.
pub fn accepts<A: Automaton>(automaton: &A, input: &str) -> bool {
    automaton.accepts(input)
}
