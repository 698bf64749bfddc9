//! Thompson construction over a postfix token stream.
//!
//! States are appended to an arena and referenced by `StateId`. Every
//! combinator builds on fragments already on the stack, so each new state is
//! reachable from the final start state.

use fsmith_core::{StateId, StateSet};

use crate::automaton::{Automaton, Nfa, NfaState};
use crate::syntax::{Token, parse_postfix};
use crate::{Error, Result};

/// A partial automaton with single entry and exit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment {
    start: StateId,
    accept: StateId,
}

impl Fragment {
    fn new(start: StateId, accept: StateId) -> Self {
        Self { start, accept }
    }

    /// Single-state fragment where start equals accept.
    fn single(state: StateId) -> Self {
        Self::new(state, state)
    }
}

/// Builder state: the growing arena and the fragment stack.
#[derive(Debug, Default)]
struct Builder {
    states: Vec<NfaState>,
    stack: Vec<Fragment>,
}

impl Builder {
    fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::default());
        id
    }

    fn connect(&mut self, from: StateId, to: StateId) {
        self.states[from as usize].add_epsilon(to);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// `start --c--> accept`
    fn literal(&mut self, c: char) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.states[start as usize].add_transition(c, accept);
        Fragment::new(start, accept)
    }

    /// `a.start → … → a.accept ─ε→ b.start → … → b.accept`
    fn concat(&mut self, a: Fragment, b: Fragment) -> Fragment {
        self.connect(a.accept, b.start);
        Fragment::new(a.start, b.accept)
    }

    /// ```text
    ///         ┌─ε→ a ─ε┐
    /// start ──┤        ├─→ accept
    ///         └─ε→ b ─ε┘
    /// ```
    fn union(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.connect(start, a.start);
        self.connect(start, b.start);
        self.connect(a.accept, accept);
        self.connect(b.accept, accept);
        Fragment::new(start, accept)
    }

    /// ```text
    ///                ┌────ε────┐
    ///                ↓         │
    /// start ─ε→ a.start → a.accept ─ε→ accept
    ///   │                                ↑
    ///   └───────────────ε────────────────┘
    /// ```
    fn star(&mut self, a: Fragment) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.connect(start, a.start);
        self.connect(start, accept);
        self.connect(a.accept, a.start);
        self.connect(a.accept, accept);
        Fragment::new(start, accept)
    }

    /// `a` followed by `a*`, sharing `a`: at least one pass is mandatory,
    /// so `a.start` stays the entry.
    ///
    /// ```text
    ///     ┌────ε────┐
    ///     ↓         │
    /// a.start → a.accept ─ε→ accept
    /// ```
    fn plus(&mut self, a: Fragment) -> Fragment {
        let accept = self.add_state();
        self.connect(a.accept, a.start);
        self.connect(a.accept, accept);
        Fragment::new(a.start, accept)
    }

    /// Union of `a` with a single-state empty fragment.
    fn optional(&mut self, a: Fragment) -> Fragment {
        let empty = Fragment::single(self.add_state());
        self.union(a, empty)
    }

    /// Pop `N` operands for `token`, last-pushed last in the returned array.
    fn pop_operands<const N: usize>(
        &mut self,
        token: Token,
        position: usize,
    ) -> Result<[Fragment; N]> {
        let depth = self.stack.len();
        if depth < N {
            return Err(Error::MalformedExpression {
                token: Some(token),
                position,
                depth,
            });
        }
        let mut operands = [Fragment::single(0); N];
        for slot in operands.iter_mut().rev() {
            // depth >= N was checked above
            if let Some(fragment) = self.stack.pop() {
                *slot = fragment;
            }
        }
        Ok(operands)
    }

    fn push_token(&mut self, token: Token, position: usize) -> Result<()> {
        let fragment = match token {
            Token::Literal(c) => self.literal(c),
            Token::Concat => {
                let [a, b] = self.pop_operands::<2>(token, position)?;
                self.concat(a, b)
            }
            Token::Union => {
                let [a, b] = self.pop_operands::<2>(token, position)?;
                self.union(a, b)
            }
            Token::Star => {
                let [a] = self.pop_operands::<1>(token, position)?;
                self.star(a)
            }
            Token::Plus => {
                let [a] = self.pop_operands::<1>(token, position)?;
                self.plus(a)
            }
            Token::Optional => {
                let [a] = self.pop_operands::<1>(token, position)?;
                self.optional(a)
            }
        };
        self.stack.push(fragment);
        Ok(())
    }

    fn finish(mut self, token_count: usize) -> Result<Nfa> {
        let depth = self.stack.len();
        let fragment = match self.stack.pop() {
            Some(fragment) if depth == 1 => fragment,
            _ => {
                return Err(Error::MalformedExpression {
                    token: None,
                    position: token_count,
                    depth,
                });
            }
        };
        Ok(Nfa::from_parts(
            self.states,
            fragment.start,
            StateSet::singleton(fragment.accept),
        ))
    }
}

/// Build an NFA from postfix tokens.
///
/// An empty stream is the empty expression: the result accepts only `""`
/// and reports [`Nfa::is_empty_expression`].
pub fn compile(tokens: &[Token]) -> Result<Nfa> {
    if tokens.is_empty() {
        log::debug!("empty expression: compiling the empty-string automaton");
        return Ok(Nfa::empty_expression());
    }

    let mut builder = Builder::default();
    for (position, &token) in tokens.iter().enumerate() {
        builder.push_token(token, position)?;
    }

    let nfa = builder.finish(tokens.len())?;
    log::debug!(
        "thompson: {} tokens -> {} NFA states",
        tokens.len(),
        nfa.state_count()
    );
    Ok(nfa)
}

/// Parse postfix text and build its NFA.
pub fn compile_postfix(text: &str) -> Result<Nfa> {
    compile(&parse_postfix(text)?)
}
