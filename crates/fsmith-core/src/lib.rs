#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by fsmith automata.
//!
//! Two layers:
//! - **Identity layer**: arena indices (`StateId`) and ordered id sets (`StateSet`)
//! - **Label layer**: transition labels with a dedicated epsilon marker (`Label`)

use std::collections::BTreeSet;
use std::fmt;

pub mod colors;

pub use colors::Colors;

#[cfg(test)]
mod lib_tests;

// ============================================================================
// Identity Layer
// ============================================================================

/// Index into an automaton's state arena.
pub type StateId = u32;

/// Ordered set of state ids.
///
/// Equality and hashing are by content, so two sets built in different
/// insertion orders are the same key. Subset construction relies on this.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateSet(BTreeSet<StateId>);

impl StateSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn singleton(id: StateId) -> Self {
        Self(BTreeSet::from([id]))
    }

    /// Insert an id, returning `true` if it was not present.
    pub fn insert(&mut self, id: StateId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().copied()
    }

    /// Smallest id in the set.
    pub fn first(&self) -> Option<StateId> {
        self.0.first().copied()
    }

    pub fn union_with(&mut self, other: &StateSet) {
        self.0.extend(other.iter());
    }

    pub fn intersects(&self, other: &StateSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|id| large.contains(id))
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = StateId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, StateId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "}}")
    }
}

// ============================================================================
// Label Layer
// ============================================================================

/// Transition label: an alphabet symbol or the epsilon marker.
///
/// Epsilon is its own variant and never a member of any alphabet, so no
/// literal symbol (including one spelled like an empty string) can collide
/// with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Symbol(char),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Label::Symbol(c) => Some(c),
            Label::Epsilon => None,
        }
    }
}

impl From<char> for Label {
    fn from(c: char) -> Self {
        Label::Symbol(c)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Symbol(c) => write!(f, "{}", c.escape_debug()),
            Label::Epsilon => write!(f, "ε"),
        }
    }
}
