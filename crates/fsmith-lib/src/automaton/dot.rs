//! Graphviz DOT rendering.
//!
//! Like the text dump, this reads only the export contract. Accepting
//! states are double circles and an invisible `start` point marks entry:
//!
//! ```text
//! digraph min {
//!     rankdir=LR;
//!     node [shape=circle];
//!     start [shape=point];
//!     S1 [shape=doublecircle];
//!     start -> S0;
//!     S0 -> S1 [label="a"];
//! }
//! ```

use std::fmt::Write;

use fsmith_core::Label;

use super::Automaton;

/// Render `automaton` as a DOT digraph called `name`.
pub fn to_dot(automaton: &impl Automaton, name: &str) -> String {
    let mut out = String::new();
    format_dot(&mut out, automaton, name).expect("String write never fails");
    out
}

fn format_dot(w: &mut String, automaton: &impl Automaton, name: &str) -> std::fmt::Result {
    writeln!(w, "digraph {} {{", quote_id(name))?;
    writeln!(w, "    rankdir=LR;")?;
    writeln!(w, "    node [shape=circle];")?;
    writeln!(w, "    start [shape=point];")?;

    for info in automaton.states().filter(|s| s.is_accept) {
        writeln!(w, "    S{} [shape=doublecircle];", info.id)?;
    }

    writeln!(w, "    start -> S{};", automaton.start())?;
    for edge in automaton.transitions() {
        writeln!(
            w,
            "    S{} -> S{} [label=\"{}\"];",
            edge.source,
            edge.target,
            escape_label(edge.label)
        )?;
    }

    writeln!(w, "}}")
}

/// Bare identifiers stay bare; anything else is quoted.
fn quote_id(name: &str) -> String {
    let bare = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

fn escape_label(label: Label) -> String {
    match label {
        Label::Epsilon => "ε".to_string(),
        Label::Symbol(c) => c.escape_debug().to_string(),
    }
}
