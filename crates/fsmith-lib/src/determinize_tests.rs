use fsmith_core::StateSet;

use crate::automaton::{Automaton, AutomatonPrinter, Dfa};
use crate::compile::compile_postfix;
use crate::determinize::determinize;

fn dfa(postfix: &str) -> Dfa {
    determinize(&compile_postfix(postfix).unwrap())
}

fn dfa_dump(postfix: &str) -> String {
    AutomatonPrinter::new(&dfa(postfix)).show_subsets(true).dump()
}

#[test]
fn concat_chain() {
    insta::assert_snapshot!(dfa_dump("ab."), @r"
    S0 {0} (start): a → S1
    S1 {1,2}: b → S2
    S2 {3} (accept): ∅
    ");
}

#[test]
fn union_branches_become_separate_states() {
    insta::assert_snapshot!(dfa_dump("ab|"), @r"
    S0 {0,2,4} (start): a → S1, b → S2
    S1 {1,5} (accept): ∅
    S2 {3,5} (accept): ∅
    ");
}

#[test]
fn star_start_is_accepting() {
    insta::assert_snapshot!(dfa_dump("a*"), @r"
    S0 {0,2,3} (start, accept): a → S1
    S1 {0,1,3} (accept): a → S1
    ");
}

#[test]
fn starred_group_then_literal() {
    insta::assert_snapshot!(dfa_dump("ab|*c."), @r"
    S0 {0,2,4,6,7,8} (start): a → S1, b → S2, c → S3
    S1 {0,1,2,4,5,7,8}: a → S1, b → S2, c → S3
    S2 {0,2,3,4,5,7,8}: a → S1, b → S2, c → S3
    S3 {9} (accept): ∅
    ");
}

#[test]
fn start_is_zero_and_subsets_are_unique() {
    let dfa = dfa("ab|*a.b?.");
    assert_eq!(dfa.start(), 0);

    let subsets: Vec<&StateSet> = dfa.iter().map(|(_, s)| s.subset()).collect();
    for (i, a) in subsets.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &subsets[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn find_by_subset() {
    let dfa = dfa("ab|");
    let subset: StateSet = [1, 5].into_iter().collect();
    assert_eq!(dfa.find(&subset), Some(1));
    assert_eq!(dfa.find(&StateSet::singleton(7)), None);
}

#[test]
fn alphabet_is_carried_over() {
    let nfa = compile_postfix("ab.c|").unwrap();
    let dfa = determinize(&nfa);
    assert_eq!(dfa.alphabet(), nfa.alphabet());
}

#[test]
fn at_most_one_target_per_symbol() {
    let dfa = dfa("ab|*ab|*.a.");
    let edges: Vec<_> = dfa.transitions().collect();
    for pair in edges.windows(2) {
        assert!((pair[0].source, pair[0].label) != (pair[1].source, pair[1].label));
    }
}

#[test]
fn empty_expression_is_single_accepting_state() {
    let dfa = dfa("");
    assert_eq!(dfa.state_count(), 1);
    assert!(dfa.is_accept(0));
    assert_eq!(dfa.transitions().count(), 0);
}
