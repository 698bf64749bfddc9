//! Language equivalence across the pipeline.
//!
//! For each expression, the NFA, the subset-construction DFA and the
//! minimal DFA must agree on every input up to a fixed length, including
//! inputs with a symbol outside the alphabet.

use proptest::prelude::*;

use crate::automaton::{Automaton, dump};
use crate::compile::compile_postfix;
use crate::determinize::determinize;
use crate::minimize::minimize;

const SYMBOLS: [char; 4] = ['a', 'b', 'c', 'x'];
const MAX_LEN: usize = 5;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every string over `SYMBOLS` of length `0..=MAX_LEN`.
fn inputs() -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..MAX_LEN {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                SYMBOLS.iter().map(move |c| {
                    let mut s = prefix.clone();
                    s.push(*c);
                    s
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

/// Returns the first input on which two stages disagree.
fn first_disagreement(postfix: &str) -> Option<String> {
    let nfa = compile_postfix(postfix).unwrap();
    let dfa = determinize(&nfa);
    let minimal = minimize(&dfa);

    inputs().into_iter().find(|input| {
        let expected = nfa.accepts(input);
        dfa.accepts(input) != expected || minimal.accepts(input) != expected
    })
}

#[test]
fn stages_agree_on_fixed_expressions() {
    init_logger();
    for postfix in [
        "a",
        "ab.",
        "ab|",
        "a*",
        "a+",
        "a?",
        "ab|*c.",
        "ab.*a.",
        "ab|+c?.",
        "a*b*.",
        "a**",
        "a?*",
        "ab.ba.|*",
        "abc..a|+",
        "",
    ] {
        assert_eq!(first_disagreement(postfix), None, "{postfix}");
    }
}

/// Random well-formed postfix over `a`, `b`, `c`.
fn arb_postfix(max_depth: u32) -> impl Strategy<Value = String> {
    let leaf = prop_oneof![Just("a"), Just("b"), Just("c")].prop_map(str::to_string);

    leaf.prop_recursive(max_depth, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}{b}.")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}{b}|")),
            inner.clone().prop_map(|a| format!("{a}*")),
            inner.clone().prop_map(|a| format!("{a}+")),
            inner.clone().prop_map(|a| format!("{a}?")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stages_agree(postfix in arb_postfix(4)) {
        init_logger();
        prop_assert_eq!(first_disagreement(&postfix), None);
    }

    #[test]
    fn minimize_never_grows_and_is_idempotent(postfix in arb_postfix(4)) {
        let dfa = determinize(&compile_postfix(&postfix).unwrap());
        let once = minimize(&dfa);
        let twice = minimize(&once);

        prop_assert!(once.state_count() <= dfa.state_count());
        prop_assert_eq!(dump(&once), dump(&twice));
    }

    #[test]
    fn dfa_is_deterministic(postfix in arb_postfix(4)) {
        let dfa = determinize(&compile_postfix(&postfix).unwrap());
        let edges: Vec<_> = dfa.transitions().collect();
        for pair in edges.windows(2) {
            prop_assert!((pair[0].source, pair[0].label) != (pair[1].source, pair[1].label));
        }
        prop_assert_eq!(dfa.start(), 0);
    }
}
