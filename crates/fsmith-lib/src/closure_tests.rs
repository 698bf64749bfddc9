use fsmith_core::StateSet;

use crate::closure::{advance, epsilon_closure, step};
use crate::compile::compile_postfix;

fn set(ids: &[u32]) -> StateSet {
    ids.iter().copied().collect()
}

#[test]
fn closure_contains_seed() {
    let nfa = compile_postfix("a").unwrap();
    assert_eq!(epsilon_closure(&nfa, &set(&[0])), set(&[0]));
    assert_eq!(epsilon_closure(&nfa, &set(&[1])), set(&[1]));
}

#[test]
fn closure_follows_concat_link() {
    let nfa = compile_postfix("ab.").unwrap();
    assert_eq!(epsilon_closure(&nfa, &set(&[1])), set(&[1, 2]));
}

#[test]
fn closure_of_union_start_reaches_both_branches() {
    let nfa = compile_postfix("ab|").unwrap();
    assert_eq!(epsilon_closure(&nfa, &set(&[4])), set(&[0, 2, 4]));
}

#[test]
fn closure_terminates_on_star_cycle() {
    // S1 ─ε→ S0 is the loop back edge.
    let nfa = compile_postfix("a*").unwrap();
    assert_eq!(epsilon_closure(&nfa, &set(&[2])), set(&[0, 2, 3]));
    assert_eq!(epsilon_closure(&nfa, &set(&[1])), set(&[0, 1, 3]));
}

#[test]
fn closure_terminates_on_nested_star() {
    let nfa = compile_postfix("a**").unwrap();
    assert_eq!(epsilon_closure(&nfa, &set(&[4])), set(&[0, 2, 3, 4, 5]));
    assert_eq!(epsilon_closure(&nfa, &set(&[1])), set(&[0, 1, 2, 3, 5]));
}

#[test]
fn closure_of_empty_set_is_empty() {
    let nfa = compile_postfix("a*").unwrap();
    assert!(epsilon_closure(&nfa, &StateSet::new()).is_empty());
}

#[test]
fn step_does_not_close() {
    let nfa = compile_postfix("a*").unwrap();
    assert_eq!(step(&nfa, &set(&[0, 2, 3]), 'a'), set(&[1]));
    assert_eq!(advance(&nfa, &set(&[0, 2, 3]), 'a'), set(&[0, 1, 3]));
}

#[test]
fn step_on_unknown_symbol_is_empty() {
    let nfa = compile_postfix("ab|").unwrap();
    assert!(step(&nfa, &set(&[0, 2, 4]), 'c').is_empty());
    assert_eq!(advance(&nfa, &set(&[0, 2, 4]), 'b'), set(&[3, 5]));
}
