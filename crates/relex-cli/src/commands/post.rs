use std::path::PathBuf;

use relex_compiler::Alphabet;
use relex_compiler::pattern::{insert_concat, to_postfix};

use super::input::load_tokens;

pub struct PostArgs {
    pub input_path: Option<PathBuf>,
    pub alphabet: Option<String>,
    pub pattern: Option<String>,
}

/// Show the two intermediate pattern forms the compiler runs through.
pub fn run(args: PostArgs) {
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
    let expanded = match insert_concat(&pattern, &alphabet) {
        Ok(expanded) => expanded,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let postfix = match to_postfix(&expanded, &alphabet) {
        Ok(postfix) => postfix,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("infix:   {}", expanded);
    println!("postfix: {}", postfix);
}
