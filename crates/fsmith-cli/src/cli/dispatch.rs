//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` pulls the relevant fields
//! - `Into<*Args>` impls bridge dispatch to command handlers
//! - `match` shifts its first positional into the inputs when `--file` is set

use std::path::PathBuf;

use clap::ArgMatches;
use fsmith_lib::Stage;
use log::LevelFilter;

use super::ColorChoice;
use crate::commands::dot::DotArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::expr_loader::ExprSource;
use crate::commands::matching::MatchArgs;
use crate::commands::postfix::PostfixArgs;

/// Where the expression comes from and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprParams {
    pub expr: Option<String>,
    pub expr_file: Option<PathBuf>,
    pub postfix: bool,
}

impl ExprParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: m.get_one::<String>("expr").cloned(),
            expr_file: m.get_one::<PathBuf>("expr_file").cloned(),
            postfix: m.get_flag("postfix"),
        }
    }
}

impl From<ExprParams> for ExprSource {
    fn from(p: ExprParams) -> Self {
        Self {
            text: p.expr,
            path: p.expr_file,
            postfix: p.postfix,
        }
    }
}

pub struct PostfixParams {
    pub expr: ExprParams,
    pub color: ColorChoice,
}

impl PostfixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: ExprParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<PostfixParams> for PostfixArgs {
    fn from(p: PostfixParams) -> Self {
        Self {
            source: p.expr.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub expr: ExprParams,
    pub stage: Stage,
    pub subsets: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: ExprParams::from_matches(m),
            stage: parse_stage(m),
            subsets: m.get_flag("subsets"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            source: p.expr.into(),
            stage: p.stage,
            subsets: p.subsets,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DotParams {
    pub expr: ExprParams,
    pub stage: Stage,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl DotParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: ExprParams::from_matches(m),
            stage: parse_stage(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DotParams> for DotArgs {
    fn from(p: DotParams) -> Self {
        Self {
            source: p.expr.into(),
            stage: p.stage,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub expr: ExprParams,
    pub inputs: Vec<String>,
    pub stage: Stage,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let mut expr = ExprParams::from_matches(m);
        let mut inputs: Vec<String> = m
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        // With --file, the first positional is an input, not the expression.
        if expr.expr_file.is_some()
            && let Some(first) = expr.expr.take()
        {
            inputs.insert(0, first);
        }

        Self {
            expr,
            inputs,
            stage: parse_stage(m),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            source: p.expr.into(),
            inputs: p.inputs,
            stage: p.stage,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_stage(m: &ArgMatches) -> Stage {
    m.get_one::<String>("stage")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

/// Log level for `-v` count: warnings by default, then debug, then trace.
pub fn log_level(m: &ArgMatches) -> LevelFilter {
    match m.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
