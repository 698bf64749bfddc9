use fsmith_core::{Label, StateSet};

use super::{Automaton, StateInfo, Transition};
use crate::compile::compile_postfix;
use crate::determinize::determinize;

#[test]
fn states_report_start_and_accept() {
    let nfa = compile_postfix("a").unwrap();
    let states: Vec<StateInfo> = nfa.states().collect();
    assert_eq!(
        states,
        vec![
            StateInfo {
                id: 0,
                is_start: true,
                is_accept: false,
            },
            StateInfo {
                id: 1,
                is_start: false,
                is_accept: true,
            },
        ]
    );
}

#[test]
fn nfa_transitions_are_ordered() {
    let nfa = compile_postfix("ab|").unwrap();
    let edges: Vec<Transition> = nfa.transitions().collect();
    assert_eq!(
        edges,
        vec![
            Transition::new(0, Label::Symbol('a'), 1),
            Transition::new(1, Label::Epsilon, 5),
            Transition::new(2, Label::Symbol('b'), 3),
            Transition::new(3, Label::Epsilon, 5),
            Transition::new(4, Label::Epsilon, 0),
            Transition::new(4, Label::Epsilon, 2),
        ]
    );

    let mut sorted = edges.clone();
    sorted.sort();
    assert_eq!(sorted, edges);
}

#[test]
fn dfa_transitions_carry_symbols_only() {
    let dfa = determinize(&compile_postfix("ab|*c.").unwrap());
    assert!(dfa.transitions().all(|t| !t.label.is_epsilon()));
    assert_eq!(dfa.transitions().count(), 9);
}

#[test]
fn nfa_state_accessors() {
    let nfa = compile_postfix("a*").unwrap();
    assert_eq!(nfa.start(), 2);
    assert_eq!(nfa.accept(), &StateSet::singleton(3));
    assert_eq!(nfa.state(0).targets('a'), Some(&StateSet::singleton(1)));
    assert_eq!(nfa.state(0).targets('b'), None);
    assert_eq!(nfa.state(1).epsilon().iter().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(nfa.iter().count(), nfa.state_count());
    assert_eq!(nfa.subset(0), None);
}

#[test]
fn dfa_state_accessors() {
    let dfa = determinize(&compile_postfix("ab|").unwrap());
    assert_eq!(dfa.target(0, 'a'), Some(1));
    assert_eq!(dfa.target(0, 'c'), None);
    assert_eq!(dfa.target(1, 'a'), None);
    assert_eq!(dfa.accept_states().iter().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(
        dfa.state(0).edges().collect::<Vec<_>>(),
        vec![('a', 1), ('b', 2)]
    );
    assert!(!dfa.state(0).is_accept());
    assert_eq!(dfa.subset(1), Some(&[1, 5].into_iter().collect()));
}

#[test]
fn out_of_range_state_is_not_accepting() {
    let nfa = compile_postfix("a").unwrap();
    let dfa = determinize(&nfa);
    assert!(!nfa.is_accept(99));
    assert!(!dfa.is_accept(99));
    assert!(dfa.is_accept(1));
}
