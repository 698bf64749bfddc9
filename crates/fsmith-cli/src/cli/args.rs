//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands compose the same
//! definitions instead of repeating them.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline expression text (positional).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .help("Regular expression (infix unless --postfix)")
}

/// Expression file (-f/--file), `-` for stdin.
pub fn expr_file_arg() -> Arg {
    Arg::new("expr_file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the expression from a file (- for stdin)")
}

/// Read EXPR as postfix (--postfix).
pub fn postfix_arg() -> Arg {
    Arg::new("postfix")
        .long("postfix")
        .action(ArgAction::SetTrue)
        .help("Treat the expression as postfix (e.g. 'ab|*c.')")
}

/// Pipeline stage (--stage).
pub fn stage_arg() -> Arg {
    Arg::new("stage")
        .long("stage")
        .value_name("STAGE")
        .default_value("min")
        .value_parser(["nfa", "dfa", "min"])
        .help("Automaton to use: Thompson NFA, subset DFA or minimal DFA")
}

/// Inputs to test for membership (positional, repeatable).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(0..)
        .action(ArgAction::Append)
        .help("Strings to match against the whole expression")
}

/// Print source-state sets (--subsets).
pub fn subsets_arg() -> Arg {
    Arg::new("subsets")
        .long("subsets")
        .action(ArgAction::SetTrue)
        .help("Show the states each DFA state was built from")
}

/// Output file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .global(true)
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace)")
}
