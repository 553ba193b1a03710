//! Alphabet membership for pattern classification.
//!
//! Every later stage asks the same question: is this character a literal
//! symbol or an operator? The alphabet answers it.

use indexmap::IndexSet;

/// Reserved epsilon marker used on no-input transitions.
///
/// Guaranteed to never be an alphabet member; callers constructing an
/// [`Alphabet`] must keep it out of the symbol set.
pub const EPSILON: char = 'E';

/// Immutable set of single-character symbols.
///
/// Built once from the raw alphabet token and never mutated. Membership
/// tests go through the deduplicated set; rendering reproduces the original
/// token unchanged, duplicates included.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: IndexSet<char>,
    text: String,
}

impl Alphabet {
    /// Build from the raw alphabet token. Duplicates collapse for
    /// membership; the token itself is kept for rendering.
    pub fn new(symbols: &str) -> Self {
        debug_assert!(
            !symbols.contains(EPSILON),
            "alphabet must not contain the reserved epsilon marker"
        );
        Self {
            symbols: symbols.chars().collect(),
            text: symbols.to_string(),
        }
    }

    /// True iff `c` is a literal alphabet symbol. Total, no side effects.
    pub fn is_symbol(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The alphabet token as originally written.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
