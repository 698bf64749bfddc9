use fsmith_lib::{AutomatonPrinter, Stage};

use super::expr_loader::{ExprSource, load_pattern};

pub struct DumpArgs {
    pub source: ExprSource,
    pub stage: Stage,
    pub subsets: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let pattern = load_pattern(&args.source, args.color);
    let view = pattern.stage(args.stage);

    let out = AutomatonPrinter::new(&view)
        .colored(args.color)
        .show_subsets(args.subsets)
        .dump();
    print!("{}", out);
}
