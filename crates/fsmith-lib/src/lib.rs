//! fsmith: regular expressions to minimal DFAs.
//!
//! The pipeline runs in fixed stages:
//! - `syntax` - postfix tokens, infix shunting-yard, syntax errors
//! - `compile` - Thompson NFA construction
//! - `closure` - epsilon closure and symbol steps over the NFA
//! - `determinize` - subset construction
//! - `minimize` - Moore partition refinement
//! - `matcher` - membership queries
//! - `pattern` - high-level facade holding all three automata
//!
//! Every stage takes its input by shared reference and returns a fresh
//! automaton; nothing is mutated after construction.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod automaton;
pub mod closure;
pub mod compile;
pub mod determinize;
pub mod matcher;
pub mod minimize;
pub mod pattern;
pub mod syntax;

#[cfg(test)]
mod closure_tests;
#[cfg(test)]
mod determinize_tests;
#[cfg(test)]
mod properties_tests;

pub use automaton::{
    Automaton, AutomatonPrinter, Dfa, Nfa, StateInfo, Transition, dump, to_dot,
};
pub use compile::{compile, compile_postfix};
pub use determinize::determinize;
pub use minimize::minimize;
pub use pattern::{Pattern, Stage, StageView};
pub use syntax::{SyntaxError, Token};

/// Errors from building an automaton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The postfix stream does not reduce to exactly one fragment.
    ///
    /// `token` is the operator that found too few operands, or `None` when
    /// the stream ended with `depth` fragments instead of one.
    #[error("{}", malformed_message(.token, .position, .depth))]
    MalformedExpression {
        token: Option<Token>,
        position: usize,
        depth: usize,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

fn malformed_message(token: &Option<Token>, position: &usize, depth: &usize) -> String {
    match token {
        Some(token) => format!(
            "malformed expression: `{token}` at position {position} needs {} operand(s), found {depth}",
            token.arity()
        ),
        None => format!(
            "malformed expression: {depth} fragments left after {position} tokens, expected 1"
        ),
    }
}

/// Result type for automaton construction.
pub type Result<T> = std::result::Result<T, Error>;
