//! Pipeline facade: pattern in, automaton out.

use crate::nfa::{self, Nfa};
use crate::pattern::{insert_concat, to_postfix};
use crate::{Alphabet, Result};

/// Run the full pipeline: concatenation insertion, postfix conversion,
/// Thompson construction.
///
/// Each stage consumes the previous stage's pattern form; only one
/// representation is live at a time. The returned automaton is immutable
/// and ready for [`crate::nfa::render_table`] or [`crate::nfa::to_dot`].
pub fn compile(alphabet: &Alphabet, pattern: &str) -> Result<Nfa> {
    let expanded = insert_concat(pattern, alphabet)?;
    let postfix = to_postfix(&expanded, alphabet)?;
    nfa::build(&postfix, alphabet)
}
