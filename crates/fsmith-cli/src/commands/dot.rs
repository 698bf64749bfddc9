use std::fs;
use std::path::PathBuf;

use fsmith_lib::{Stage, to_dot};

use super::expr_loader::{ExprSource, load_pattern};

pub struct DotArgs {
    pub source: ExprSource,
    pub stage: Stage,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: DotArgs) {
    let pattern = load_pattern(&args.source, args.color);
    let dot = to_dot(&pattern.stage(args.stage), args.stage.name());

    let Some(path) = args.output else {
        print!("{}", dot);
        return;
    };

    if let Err(e) = fs::write(&path, dot) {
        eprintln!("error: failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    log::info!("wrote {}", path.display());
}
