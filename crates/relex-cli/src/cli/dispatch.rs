//! Dispatch logic: extract params from ArgMatches and convert to command
//! args.
//!
//! `*Params` structs mirror command `*Args` but are populated from clap;
//! `Into<*Args>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::FormatChoice;
use crate::commands::dot::DotArgs;
use crate::commands::post::PostArgs;
use crate::commands::table::TableArgs;

pub struct TableParams {
    pub input_path: Option<PathBuf>,
    pub alphabet: Option<String>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
    pub format: FormatChoice,
}

impl TableParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            alphabet: m.get_one::<String>("alphabet").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            format: parse_format(m),
        }
    }
}

impl From<TableParams> for TableArgs {
    fn from(p: TableParams) -> Self {
        Self {
            input_path: p.input_path,
            alphabet: p.alphabet,
            pattern: p.pattern,
            output: p.output,
            json: p.format == FormatChoice::Json,
        }
    }
}

pub struct DotParams {
    pub input_path: Option<PathBuf>,
    pub alphabet: Option<String>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
}

impl DotParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            alphabet: m.get_one::<String>("alphabet").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<DotParams> for DotArgs {
    fn from(p: DotParams) -> Self {
        Self {
            input_path: p.input_path,
            alphabet: p.alphabet,
            pattern: p.pattern,
            output: p.output,
        }
    }
}

pub struct PostParams {
    pub input_path: Option<PathBuf>,
    pub alphabet: Option<String>,
    pub pattern: Option<String>,
}

impl PostParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            alphabet: m.get_one::<String>("alphabet").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
        }
    }
}

impl From<PostParams> for PostArgs {
    fn from(p: PostParams) -> Self {
        Self {
            input_path: p.input_path,
            alphabet: p.alphabet,
            pattern: p.pattern,
        }
    }
}

fn parse_format(m: &ArgMatches) -> FormatChoice {
    m.get_one::<String>("format")
        .map(|s| FormatChoice::parse(s))
        .unwrap_or_default()
}
