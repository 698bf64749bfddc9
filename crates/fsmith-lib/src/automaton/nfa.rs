//! Nondeterministic automaton with epsilon edges.

use std::collections::{BTreeMap, BTreeSet};

use fsmith_core::{Label, StateId, StateSet};

use super::{Automaton, Transition};
use crate::matcher;

/// An NFA state: symbol edges to target sets, plus epsilon edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NfaState {
    transitions: BTreeMap<char, StateSet>,
    epsilon: StateSet,
}

impl NfaState {
    pub fn targets(&self, symbol: char) -> Option<&StateSet> {
        self.transitions.get(&symbol)
    }

    pub fn epsilon(&self) -> &StateSet {
        &self.epsilon
    }

    /// Symbol edges as `(symbol, targets)` in symbol order.
    pub fn symbol_edges(&self) -> impl Iterator<Item = (char, &StateSet)> + '_ {
        self.transitions.iter().map(|(c, targets)| (*c, targets))
    }

    pub(crate) fn add_transition(&mut self, symbol: char, target: StateId) {
        self.transitions.entry(symbol).or_default().insert(target);
    }

    pub(crate) fn add_epsilon(&mut self, target: StateId) {
        self.epsilon.insert(target);
    }
}

/// Thompson NFA.
///
/// Built only by `compile`; after construction it is never mutated.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
    accept: StateSet,
    alphabet: BTreeSet<char>,
    empty_expression: bool,
}

impl Nfa {
    /// Assemble an NFA from a finished arena; the alphabet is derived.
    pub(crate) fn from_parts(states: Vec<NfaState>, start: StateId, accept: StateSet) -> Self {
        let alphabet = states
            .iter()
            .flat_map(|s| s.transitions.keys().copied())
            .collect();
        Self {
            states,
            start,
            accept,
            alphabet,
            empty_expression: false,
        }
    }

    /// The automaton for an empty token stream: one state, start and
    /// accepting, with no edges. Accepts only `""`.
    pub(crate) fn empty_expression() -> Self {
        let mut nfa = Self::from_parts(vec![NfaState::default()], 0, StateSet::singleton(0));
        nfa.empty_expression = true;
        nfa
    }

    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id as usize]
    }

    pub fn accept(&self) -> &StateSet {
        &self.accept
    }

    /// True when compiled from an empty token stream.
    pub fn is_empty_expression(&self) -> bool {
        self.empty_expression
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &NfaState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }
}

impl Automaton for Nfa {
    fn start(&self) -> StateId {
        self.start
    }

    fn state_count(&self) -> usize {
        self.states.len()
    }

    fn is_accept(&self, id: StateId) -> bool {
        self.accept.contains(id)
    }

    fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.iter().flat_map(|(source, state)| {
            let symbols = state.symbol_edges().flat_map(move |(c, targets)| {
                targets
                    .iter()
                    .map(move |target| Transition::new(source, Label::Symbol(c), target))
            });
            let epsilons = state
                .epsilon
                .iter()
                .map(move |target| Transition::new(source, Label::Epsilon, target));
            symbols.chain(epsilons)
        })
    }

    fn accepts(&self, input: &str) -> bool {
        matcher::accepts_nfa(self, input)
    }
}
