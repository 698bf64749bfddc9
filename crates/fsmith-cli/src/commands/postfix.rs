use super::expr_loader::{ExprSource, load_pattern};

pub struct PostfixArgs {
    pub source: ExprSource,
    pub color: bool,
}

pub fn run(args: PostfixArgs) {
    let pattern = load_pattern(&args.source, args.color);
    println!("{}", pattern.postfix());
}
