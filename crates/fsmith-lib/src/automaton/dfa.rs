//! Deterministic automaton with a partial transition function.

use std::collections::{BTreeMap, BTreeSet};

use fsmith_core::{Label, StateId, StateSet};

use super::{Automaton, Transition};
use crate::matcher;

/// A DFA state.
///
/// `subset` names the states it stands for: NFA states after subset
/// construction, or original DFA states (its block) after minimization.
/// Symbols with no entry in `transitions` lead to the implicit dead state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    subset: StateSet,
    transitions: BTreeMap<char, StateId>,
    accept: bool,
}

impl DfaState {
    pub fn subset(&self) -> &StateSet {
        &self.subset
    }

    pub fn target(&self, symbol: char) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    pub fn is_accept(&self) -> bool {
        self.accept
    }

    /// Defined transitions in symbol order.
    pub fn edges(&self) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.transitions.iter().map(|(c, t)| (*c, *t))
    }
}

#[derive(Debug, Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: StateId,
    alphabet: BTreeSet<char>,
}

impl Dfa {
    pub(crate) fn new(alphabet: BTreeSet<char>) -> Self {
        Self {
            states: Vec::new(),
            start: 0,
            alphabet,
        }
    }

    pub(crate) fn add_state(&mut self, subset: StateSet, accept: bool) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(DfaState {
            subset,
            transitions: BTreeMap::new(),
            accept,
        });
        id
    }

    pub(crate) fn set_start(&mut self, id: StateId) {
        self.start = id;
    }

    /// Record `source --symbol--> target`. A DFA state has at most one
    /// target per symbol, so a second call for the same pair is a bug.
    pub(crate) fn set_transition(&mut self, source: StateId, symbol: char, target: StateId) {
        let previous = self.states[source as usize]
            .transitions
            .insert(symbol, target);
        debug_assert!(
            previous.is_none_or(|p| p == target),
            "S{source} already moves on {symbol:?} to S{previous:?}"
        );
    }

    pub fn state(&self, id: StateId) -> &DfaState {
        &self.states[id as usize]
    }

    pub fn target(&self, source: StateId, symbol: char) -> Option<StateId> {
        self.state(source).target(symbol)
    }

    pub fn accept_states(&self) -> StateSet {
        self.iter()
            .filter(|(_, s)| s.accept)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &DfaState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }

    /// Id of the state standing for exactly `subset`, if any.
    pub fn find(&self, subset: &StateSet) -> Option<StateId> {
        self.iter()
            .find(|(_, s)| &s.subset == subset)
            .map(|(id, _)| id)
    }
}

impl Automaton for Dfa {
    fn start(&self) -> StateId {
        self.start
    }

    fn state_count(&self) -> usize {
        self.states.len()
    }

    fn is_accept(&self, id: StateId) -> bool {
        self.states.get(id as usize).is_some_and(|s| s.accept)
    }

    fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.iter().flat_map(|(source, state)| {
            state
                .edges()
                .map(move |(c, target)| Transition::new(source, Label::Symbol(c), target))
        })
    }

    fn accepts(&self, input: &str) -> bool {
        matcher::accepts_dfa(self, input)
    }

    fn subset(&self, id: StateId) -> Option<&StateSet> {
        Some(&self.state(id).subset)
    }
}
