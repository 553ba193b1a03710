//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("relex")
        .about("Compile regular expressions to NFA transition tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(table_command())
        .subcommand(dot_command())
        .subcommand(post_command())
}

/// Compile a pattern and print its transition table.
pub fn table_command() -> Command {
    Command::new("table")
        .about("Compile a pattern and print its NFA transition table")
        .override_usage(
            "\
  relex table <INPUT>
  relex table -a <SYMBOLS> -p <PATTERN>",
        )
        .after_help(
            r#"EXAMPLES:
  relex table input.txt                  # file with "ab a(b|a)*b"
  relex table -a ab -p '(a|b)*a'         # inline tokens
  relex table input.txt -o output.txt    # write table to file
  relex table -a ab -p 'a|b' --format json"#,
        )
        .arg(input_path_arg())
        .arg(alphabet_arg())
        .arg(pattern_arg())
        .arg(output_file_arg())
        .arg(format_arg())
}

/// Compile a pattern and print the automaton as a Graphviz digraph.
pub fn dot_command() -> Command {
    Command::new("dot")
        .about("Compile a pattern and print the NFA as a Graphviz digraph")
        .override_usage(
            "\
  relex dot <INPUT>
  relex dot -a <SYMBOLS> -p <PATTERN>",
        )
        .after_help(
            r#"EXAMPLES:
  relex dot input.txt | dot -Tsvg > nfa.svg
  relex dot -a ab -p 'a*b'"#,
        )
        .arg(input_path_arg())
        .arg(alphabet_arg())
        .arg(pattern_arg())
        .arg(output_file_arg())
}

/// Show the intermediate pattern forms.
pub fn post_command() -> Command {
    Command::new("post")
        .about("Show the concatenation-expanded and postfix pattern forms")
        .override_usage(
            "\
  relex post <INPUT>
  relex post -a <SYMBOLS> -p <PATTERN>",
        )
        .after_help(
            r#"EXAMPLES:
  relex post -a ab -p 'a(b|a)*'"#,
        )
        .arg(input_path_arg())
        .arg(alphabet_arg())
        .arg(pattern_arg())
}
