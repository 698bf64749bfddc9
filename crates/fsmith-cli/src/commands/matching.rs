use fsmith_core::Colors;
use fsmith_lib::{Automaton, Stage};

use super::expr_loader::{ExprSource, load_pattern};

pub struct MatchArgs {
    pub source: ExprSource,
    pub inputs: Vec<String>,
    pub stage: Stage,
    pub color: bool,
}

/// Print one verdict per input; exit with 2 if any input is rejected.
pub fn run(args: MatchArgs) {
    let pattern = load_pattern(&args.source, args.color);
    let automaton = pattern.stage(args.stage);
    let colors = Colors::new(args.color);

    let mut rejected = 0;
    for input in &args.inputs {
        if automaton.accepts(input) {
            println!("{}match{}    {:?}", colors.green, colors.reset, input);
        } else {
            println!("{}no match{} {:?}", colors.red, colors.reset, input);
            rejected += 1;
        }
    }

    log::debug!(
        "{} of {} inputs rejected by the {} automaton",
        rejected,
        args.inputs.len(),
        args.stage
    );
    if rejected > 0 {
        std::process::exit(2);
    }
}
