use std::path::Path;

/// Print to stdout, or write to the given file.
pub fn write_output(path: Option<&Path>, text: &str) {
    match path {
        Some(path) => {
            if let Err(e) = std::fs::write(path, text) {
                eprintln!("error: cannot write {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", text),
    }
}
