//! Input loading shared by all commands.
//!
//! Accepts either inline `-a`/`-p` tokens or an input file holding two
//! whitespace-separated tokens: the alphabet, then the pattern.

use std::path::Path;

use relex_compiler::EPSILON;

/// Resolve the alphabet and pattern tokens from CLI arguments.
///
/// Inline tokens take precedence over the input file. Errors are rendered
/// messages for the caller to print.
pub fn load_tokens(
    input_path: Option<&Path>,
    alphabet: Option<&str>,
    pattern: Option<&str>,
) -> Result<(String, String), String> {
    let (alphabet, pattern) = match (alphabet, pattern) {
        (Some(a), Some(p)) => (a.to_string(), p.to_string()),
        (Some(_), None) | (None, Some(_)) => {
            return Err("inline input needs both --alphabet and --pattern".to_string());
        }
        (None, None) => {
            let Some(path) = input_path else {
                return Err(
                    "no input: pass an input file or --alphabet and --pattern".to_string()
                );
            };
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            parse_tokens(&text)?
        }
    };

    validate_alphabet(&alphabet)?;
    Ok((alphabet, pattern))
}

/// Split the input text into the two leading tokens.
fn parse_tokens(text: &str) -> Result<(String, String), String> {
    let mut tokens = text.split_whitespace();
    let alphabet = tokens
        .next()
        .ok_or("input file is empty, expected alphabet and pattern tokens")?;
    let pattern = tokens
        .next()
        .ok_or("input file is missing the pattern token")?;
    Ok((alphabet.to_string(), pattern.to_string()))
}

fn validate_alphabet(alphabet: &str) -> Result<(), String> {
    if alphabet.is_empty() {
        return Err("alphabet cannot be empty".to_string());
    }
    if alphabet.contains(EPSILON) {
        return Err(format!(
            "alphabet cannot contain '{EPSILON}', the reserved epsilon marker"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_tokens() {
        assert_eq!(
            parse_tokens("ab a(b|a)*b\n"),
            Ok(("ab".to_string(), "a(b|a)*b".to_string()))
        );
        // Extra tokens beyond the first two are ignored.
        assert_eq!(
            parse_tokens("ab a|b trailing"),
            Ok(("ab".to_string(), "a|b".to_string()))
        );
    }

    #[test]
    fn rejects_short_input() {
        assert!(parse_tokens("").is_err());
        assert!(parse_tokens("ab").is_err());
    }

    #[test]
    fn inline_tokens_must_come_in_pairs() {
        assert!(load_tokens(None, Some("ab"), None).is_err());
        assert!(load_tokens(None, None, Some("a|b")).is_err());
        assert_eq!(
            load_tokens(None, Some("ab"), Some("a|b")),
            Ok(("ab".to_string(), "a|b".to_string()))
        );
    }

    #[test]
    fn rejects_reserved_epsilon_in_alphabet() {
        let err = load_tokens(None, Some("aE"), Some("a")).unwrap_err();
        assert!(err.contains("epsilon"));
    }

    #[test]
    fn rejects_empty_alphabet() {
        assert!(load_tokens(None, Some(""), Some("a")).is_err());
    }
}
