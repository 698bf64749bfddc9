mod cli;
mod commands;

use cli::{DotParams, DumpParams, MatchParams, PostfixParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();

    env_logger::Builder::new()
        .filter_level(log_level(&matches))
        .parse_default_env()
        .init();

    match matches.subcommand() {
        Some(("postfix", m)) => {
            let params = PostfixParams::from_matches(m);
            commands::postfix::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("dot", m)) => {
            let params = DotParams::from_matches(m);
            commands::dot::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::matching::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
