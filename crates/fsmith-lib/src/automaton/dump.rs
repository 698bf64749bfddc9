//! Dump helpers for automaton inspection and testing.
//!
//! Works on any [`Automaton`] through the export contract only, so NFA,
//! DFA and minimized DFA print the same way:
//!
//! ```text
//! S0 (start): a → S1, ε → S2
//! S1 (accept): ∅
//! ```

use std::fmt::Write;

use fsmith_core::{Colors, StateId};

use super::{Automaton, StateInfo, Transition};

/// Printer for automata with configurable output options.
pub struct AutomatonPrinter<'a, A: Automaton> {
    automaton: &'a A,
    colors: Colors,
    show_subsets: bool,
}

impl<'a, A: Automaton> AutomatonPrinter<'a, A> {
    pub fn new(automaton: &'a A) -> Self {
        Self {
            automaton,
            colors: Colors::OFF,
            show_subsets: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    /// Print the source-state set after each state name, when recorded.
    pub fn show_subsets(mut self, value: bool) -> Self {
        self.show_subsets = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;
        let mut edges = self.automaton.transitions().peekable();

        for info in self.automaton.states() {
            write!(w, "{}S{}{}", c.blue, info.id, c.reset)?;

            if self.show_subsets
                && let Some(subset) = self.automaton.subset(info.id)
            {
                write!(w, " {}{}{}", c.dim, subset, c.reset)?;
            }

            self.format_markers(w, info)?;
            w.write_str(":")?;

            let mut any = false;
            while let Some(edge) = edges.next_if(|e| e.source == info.id) {
                w.write_str(if any { ", " } else { " " })?;
                self.format_edge(w, &edge)?;
                any = true;
            }
            if !any {
                write!(w, " {}∅{}", c.dim, c.reset)?;
            }

            writeln!(w)?;
        }

        Ok(())
    }

    fn format_markers(&self, w: &mut String, info: StateInfo) -> std::fmt::Result {
        let c = self.colors;
        match (info.is_start, info.is_accept) {
            (true, true) => write!(w, " {}(start, accept){}", c.green, c.reset),
            (true, false) => write!(w, " {}(start){}", c.green, c.reset),
            (false, true) => write!(w, " {}(accept){}", c.green, c.reset),
            (false, false) => Ok(()),
        }
    }

    fn format_edge(&self, w: &mut String, edge: &Transition) -> std::fmt::Result {
        let c = self.colors;
        if edge.label.is_epsilon() {
            write!(w, "{}{}{}", c.dim, edge.label, c.reset)?;
        } else {
            write!(w, "{}", edge.label)?;
        }
        write!(w, " {}→{} ", c.dim, c.reset)?;
        write_state(w, edge.target, c)
    }
}

fn write_state(w: &mut String, id: StateId, c: Colors) -> std::fmt::Result {
    write!(w, "{}S{}{}", c.blue, id, c.reset)
}

/// Plain dump of an automaton.
pub fn dump(automaton: &impl Automaton) -> String {
    AutomatonPrinter::new(automaton).dump()
}
