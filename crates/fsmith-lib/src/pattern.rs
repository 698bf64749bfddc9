//! High-level facade: one expression, all three automata.
//!
//! ```text
//! text ─→ tokens ─→ NFA ─→ DFA ─→ minimal DFA
//! ```
//!
//! The stages are built eagerly and never change afterwards, so a
//! `Pattern` can be shared freely across threads.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use fsmith_core::{StateId, StateSet};

use crate::Result;
use crate::automaton::{Automaton, Dfa, Nfa, Transition};
use crate::compile::compile;
use crate::determinize::determinize;
use crate::minimize::minimize;
use crate::syntax::{Token, parse_postfix, postfix_string, to_postfix};

/// A compiled regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    tokens: Vec<Token>,
    nfa: Nfa,
    dfa: Dfa,
    minimal: Dfa,
}

impl Pattern {
    /// Compile a postfix token stream through every stage.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        let nfa = compile(&tokens)?;
        let dfa = determinize(&nfa);
        let minimal = minimize(&dfa);
        Ok(Self {
            tokens,
            nfa,
            dfa,
            minimal,
        })
    }

    /// Compile postfix text, e.g. `ab|*c.`.
    pub fn from_postfix(text: &str) -> Result<Self> {
        Self::from_tokens(parse_postfix(text)?)
    }

    /// Compile infix text, e.g. `(a|b)*c`.
    pub fn from_infix(text: &str) -> Result<Self> {
        Self::from_tokens(to_postfix(text)?)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The postfix form, readable back by [`Pattern::from_postfix`].
    pub fn postfix(&self) -> String {
        postfix_string(&self.tokens)
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn minimal(&self) -> &Dfa {
        &self.minimal
    }

    pub fn stage(&self, stage: Stage) -> StageView<'_> {
        match stage {
            Stage::Nfa => StageView::Nfa(&self.nfa),
            Stage::Dfa => StageView::Dfa(&self.dfa),
            Stage::Minimal => StageView::Dfa(&self.minimal),
        }
    }

    /// True when compiled from an empty expression, which matches only `""`.
    pub fn is_empty_expression(&self) -> bool {
        self.nfa.is_empty_expression()
    }

    /// Membership query, answered by the minimal DFA.
    pub fn is_match(&self, input: &str) -> bool {
        self.minimal.accepts(input)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = crate::Error;

    fn try_from(infix: &str) -> Result<Self> {
        Self::from_infix(infix)
    }
}

impl FromStr for Pattern {
    type Err = crate::Error;

    fn from_str(infix: &str) -> Result<Self> {
        Self::from_infix(infix)
    }
}

/// Pipeline stage selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    Nfa,
    Dfa,
    #[default]
    Minimal,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Nfa, Stage::Dfa, Stage::Minimal];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Nfa => "nfa",
            Stage::Dfa => "dfa",
            Stage::Minimal => "min",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "nfa" => Ok(Stage::Nfa),
            "dfa" => Ok(Stage::Dfa),
            "min" | "minimal" => Ok(Stage::Minimal),
            _ => Err(format!("unknown stage `{s}`, expected nfa, dfa or min")),
        }
    }
}

/// One stage of a [`Pattern`], usable wherever an [`Automaton`] is.
#[derive(Debug, Clone, Copy)]
pub enum StageView<'a> {
    Nfa(&'a Nfa),
    Dfa(&'a Dfa),
}

impl Automaton for StageView<'_> {
    fn start(&self) -> StateId {
        match self {
            StageView::Nfa(nfa) => nfa.start(),
            StageView::Dfa(dfa) => dfa.start(),
        }
    }

    fn state_count(&self) -> usize {
        match self {
            StageView::Nfa(nfa) => nfa.state_count(),
            StageView::Dfa(dfa) => dfa.state_count(),
        }
    }

    fn is_accept(&self, id: StateId) -> bool {
        match self {
            StageView::Nfa(nfa) => nfa.is_accept(id),
            StageView::Dfa(dfa) => dfa.is_accept(id),
        }
    }

    fn alphabet(&self) -> &BTreeSet<char> {
        match self {
            StageView::Nfa(nfa) => nfa.alphabet(),
            StageView::Dfa(dfa) => dfa.alphabet(),
        }
    }

    fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        let edges: Box<dyn Iterator<Item = Transition> + '_> = match self {
            StageView::Nfa(nfa) => Box::new(nfa.transitions()),
            StageView::Dfa(dfa) => Box::new(dfa.transitions()),
        };
        edges
    }

    fn accepts(&self, input: &str) -> bool {
        match self {
            StageView::Nfa(nfa) => nfa.accepts(input),
            StageView::Dfa(dfa) => dfa.accepts(input),
        }
    }

    fn subset(&self, id: StateId) -> Option<&StateSet> {
        match self {
            StageView::Nfa(nfa) => nfa.subset(id),
            StageView::Dfa(dfa) => dfa.subset(id),
        }
    }
}
