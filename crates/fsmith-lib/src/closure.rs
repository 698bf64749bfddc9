//! Epsilon closure and symbol steps over an NFA.

use fsmith_core::StateSet;

use crate::automaton::Nfa;

/// All states reachable from `states` through zero or more epsilon edges.
///
/// The result always contains `states` itself. Epsilon cycles (as built by
/// `*` and `+`) terminate because a state is queued only the first time it
/// enters the closure.
pub fn epsilon_closure(nfa: &Nfa, states: &StateSet) -> StateSet {
    let mut closure = states.clone();
    let mut worklist: Vec<_> = states.iter().collect();

    while let Some(state) = worklist.pop() {
        for target in nfa.state(state).epsilon() {
            if closure.insert(target) {
                worklist.push(target);
            }
        }
    }

    closure
}

/// States reached from `states` by one `symbol` edge, without closing.
pub fn step(nfa: &Nfa, states: &StateSet, symbol: char) -> StateSet {
    let mut next = StateSet::new();
    for state in states {
        if let Some(targets) = nfa.state(state).targets(symbol) {
            next.union_with(targets);
        }
    }
    next
}

/// `epsilon_closure(step(states, symbol))`.
pub fn advance(nfa: &Nfa, states: &StateSet, symbol: char) -> StateSet {
    epsilon_closure(nfa, &step(nfa, states, symbol))
}
