use std::path::PathBuf;

use relex_compiler::{Alphabet, compile, nfa::to_dot};

use super::input::load_tokens;
use crate::util::write_output;

pub struct DotArgs {
    pub input_path: Option<PathBuf>,
    pub alphabet: Option<String>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
}

pub fn run(args: DotArgs) {
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
    match compile(&alphabet, &pattern) {
        Ok(nfa) => write_output(args.output.as_deref(), &to_dot(&nfa)),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
