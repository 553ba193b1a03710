//! Explicit concatenation insertion.
//!
//! The infix grammar leaves concatenation implicit; the postfix converter
//! needs it spelled out. One left-to-right scan over adjacent pairs.

use crate::{Alphabet, Error, Result};

use super::ops::{CONCAT, GROUP_CLOSE, GROUP_OPEN, STAR};

/// Rewrite `pattern` with a [`CONCAT`] at every implicit concatenation
/// point.
///
/// The operator goes between an adjacent pair (c, n) iff the pair is
/// symbol-`(`, symbol-symbol, `)`-symbol, or `*`-symbol. The final
/// character has no successor and is always copied through, so a
/// single-character pattern comes back unchanged. An empty pattern fails
/// with [`Error::EmptyPattern`].
pub fn insert_concat(pattern: &str, alphabet: &Alphabet) -> Result<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let Some((&last, rest)) = chars.split_last() else {
        return Err(Error::EmptyPattern);
    };

    let mut out = String::with_capacity(chars.len() * 2);
    for (i, &c) in rest.iter().enumerate() {
        let n = chars[i + 1];
        out.push(c);

        let c_sym = alphabet.is_symbol(c);
        let n_sym = alphabet.is_symbol(n);
        let implicit = (c_sym && n == GROUP_OPEN)
            || (c_sym && n_sym)
            || (c == GROUP_CLOSE && n_sym)
            || (c == STAR && n_sym);
        if implicit {
            out.push(CONCAT);
        }
    }
    out.push(last);

    Ok(out)
}
