use indoc::indoc;

use super::{AutomatonPrinter, dump};
use crate::compile::compile_postfix;
use crate::determinize::determinize;

#[test]
fn plain_dump_ends_each_state_with_newline() {
    let nfa = compile_postfix("a").unwrap();
    assert_eq!(
        dump(&nfa),
        indoc! {"
            S0 (start): a → S1
            S1 (accept): ∅
        "}
    );
}

#[test]
fn colored_dump() {
    let nfa = compile_postfix("a").unwrap();
    let out = AutomatonPrinter::new(&nfa).colored(true).dump();
    assert_eq!(
        out,
        "\x1b[34mS0\x1b[0m \x1b[32m(start)\x1b[0m: a \x1b[2m→\x1b[0m \x1b[34mS1\x1b[0m\n\
         \x1b[34mS1\x1b[0m \x1b[32m(accept)\x1b[0m: \x1b[2m∅\x1b[0m\n"
    );
}

#[test]
fn colored_false_matches_plain() {
    let nfa = compile_postfix("ab|*").unwrap();
    assert_eq!(AutomatonPrinter::new(&nfa).colored(false).dump(), dump(&nfa));
}

#[test]
fn subsets_only_where_recorded() {
    let nfa = compile_postfix("a").unwrap();
    let with = AutomatonPrinter::new(&nfa).show_subsets(true).dump();
    assert_eq!(with, dump(&nfa));

    let dfa = determinize(&nfa);
    insta::assert_snapshot!(AutomatonPrinter::new(&dfa).show_subsets(true).dump(), @r"
    S0 {0} (start): a → S1
    S1 {1} (accept): ∅
    ");
}

#[test]
fn symbols_print_escaped() {
    let nfa = compile_postfix(r"\ ").unwrap();
    assert_eq!(dump(&nfa).lines().next(), Some("S0 (start):   → S1"));

    let nfa = compile_postfix("\\\t").unwrap();
    insta::assert_snapshot!(dump(&nfa), @r"
    S0 (start): \t → S1
    S1 (accept): ∅
    ");
}
