//! Automaton model shared by NFA and DFA.
//!
//! States live in an arena (`Vec`) and refer to each other by `StateId`, so
//! cyclic graphs from Kleene closure need no shared ownership.
//!
//! # Export contract
//!
//! Renderers see an automaton only through [`Automaton`]:
//!
//! ```text
//! states()      → (id, is_start, is_accept)*
//! transitions() → (source, symbol | ε, target)*
//! ```

mod dfa;
mod dot;
mod dump;
mod nfa;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod model_tests;

use std::collections::BTreeSet;

use fsmith_core::{Label, StateId, StateSet};

pub use dfa::{Dfa, DfaState};
pub use dot::to_dot;
pub use dump::{AutomatonPrinter, dump};
pub use nfa::{Nfa, NfaState};

/// One state as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    pub id: StateId,
    pub is_start: bool,
    pub is_accept: bool,
}

/// One labeled edge as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    pub source: StateId,
    pub label: Label,
    pub target: StateId,
}

impl Transition {
    pub fn new(source: StateId, label: Label, target: StateId) -> Self {
        Self {
            source,
            label,
            target,
        }
    }
}

/// Read-only view of a compiled automaton.
pub trait Automaton {
    fn start(&self) -> StateId;

    fn state_count(&self) -> usize;

    fn is_accept(&self, id: StateId) -> bool;

    /// Symbols appearing on non-epsilon transitions.
    fn alphabet(&self) -> &BTreeSet<char>;

    /// Edges ordered by source, then label, then target.
    fn transitions(&self) -> impl Iterator<Item = Transition> + '_;

    /// Membership query.
    fn accepts(&self, input: &str) -> bool;

    /// States this state was built from, if the automaton records them.
    fn subset(&self, _id: StateId) -> Option<&StateSet> {
        None
    }

    /// States in id order.
    fn states(&self) -> impl Iterator<Item = StateInfo> + '_ {
        let start = self.start();
        (0..self.state_count() as StateId).map(move |id| StateInfo {
            id,
            is_start: id == start,
            is_accept: self.is_accept(id),
        })
    }
}
