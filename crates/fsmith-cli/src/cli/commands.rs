//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.
//! `-v` is global, so it works before or after the subcommand.

use clap::Command;

use super::args::*;

/// Add the expression source args, with EXPR and --file exclusive.
fn with_expr_args(cmd: Command) -> Command {
    cmd.arg(expr_arg())
        .arg(expr_file_arg().conflicts_with("expr"))
        .arg(postfix_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fsmith")
        .about("Compile regular expressions to NFAs, DFAs and minimal DFAs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(postfix_command())
        .subcommand(dump_command())
        .subcommand(dot_command())
        .subcommand(match_command())
}

/// Translate an expression to postfix.
pub fn postfix_command() -> Command {
    let cmd = Command::new("postfix")
        .about("Print the postfix form of an expression")
        .override_usage(
            "\
  fsmith postfix <EXPR>
  fsmith postfix -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  fsmith postfix '(a|b)*c'            # ab|*c.
  fsmith postfix 'a\*b'               # escaped operator literal
  fsmith postfix --postfix 'a b .'    # normalize postfix text"#,
        )
        .arg(color_arg());

    with_expr_args(cmd)
}

/// Print one stage of the pipeline.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print states and transitions of an automaton")
        .override_usage(
            "\
  fsmith dump <EXPR> [--stage <STAGE>]
  fsmith dump -f <FILE> [--stage <STAGE>]",
        )
        .after_help(
            r#"EXAMPLES:
  fsmith dump '(a|b)*c'               # minimal DFA
  fsmith dump '(a|b)*c' --stage nfa   # Thompson NFA
  fsmith dump 'ab|*c.' --postfix --stage dfa --subsets"#,
        )
        .arg(stage_arg())
        .arg(subsets_arg())
        .arg(color_arg());

    with_expr_args(cmd)
}

/// Render one stage as Graphviz DOT.
pub fn dot_command() -> Command {
    let cmd = Command::new("dot")
        .about("Render an automaton as Graphviz DOT")
        .override_usage(
            "\
  fsmith dot <EXPR> [--stage <STAGE>] [-o <FILE>]
  fsmith dot -f <FILE> [--stage <STAGE>] [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  fsmith dot '(a|b)*c' | dot -Tpng > min.png
  fsmith dot '(a|b)*c' --stage nfa -o nfa.gv"#,
        )
        .arg(stage_arg())
        .arg(output_file_arg())
        .arg(color_arg().hide(true));

    with_expr_args(cmd)
}

/// Test inputs for membership.
///
/// With `--file`, every positional is an input.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Test whether inputs are in the language of an expression")
        .override_usage(
            "\
  fsmith match <EXPR> [INPUT]...
  fsmith match -f <FILE> [INPUT]...",
        )
        .after_help(
            r#"EXAMPLES:
  fsmith match '(a|b)*c' abc c ab     # exit 2: 'ab' is rejected
  fsmith match 'a+' a aa --stage nfa  # simulate the NFA directly
  fsmith match 'a?' ''                # empty input

Exit status is 0 when every input matches, 2 otherwise."#,
        )
        .arg(expr_arg())
        .arg(inputs_arg())
        .arg(expr_file_arg())
        .arg(postfix_arg())
        .arg(stage_arg())
        .arg(color_arg())
}
