use std::path::PathBuf;

use relex_compiler::{Alphabet, TransitionTable, compile};

use super::input::load_tokens;
use crate::util::write_output;

pub struct TableArgs {
    pub input_path: Option<PathBuf>,
    pub alphabet: Option<String>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: TableArgs) {
    let (alphabet, pattern) = match load_tokens(
        args.input_path.as_deref(),
        args.alphabet.as_deref(),
        args.pattern.as_deref(),
    ) {
        Ok(tokens) => tokens,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let alphabet = Alphabet::new(&alphabet);
    let nfa = match compile(&alphabet, &pattern) {
        Ok(nfa) => nfa,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let table = TransitionTable::new(&nfa, &alphabet);
    let text = if args.json {
        match serde_json::to_string_pretty(&table) {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        table.render()
    };

    write_output(args.output.as_deref(), &text);
}
