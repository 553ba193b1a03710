//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` composed into commands, so the same
//! definition is reused across `table`, `dot`, and `post`.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Input file with two whitespace-separated tokens: alphabet, pattern
/// (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Input file containing the alphabet and pattern tokens")
}

/// Inline alphabet token (-a/--alphabet).
pub fn alphabet_arg() -> Arg {
    Arg::new("alphabet")
        .short('a')
        .long("alphabet")
        .value_name("SYMBOLS")
        .help("Alphabet as a string of single-character symbols")
}

/// Inline pattern (-p/--pattern).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('p')
        .long("pattern")
        .value_name("PATTERN")
        .help("Infix pattern over the alphabet (|, *, parentheses)")
}

/// Write output to file instead of stdout (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Output format for the table (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}
