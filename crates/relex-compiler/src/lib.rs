#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Relex compiler: regular expressions to NFA transition tables.
//!
//! The compilation pipeline has four stages, each consuming the previous
//! stage's output:
//! - `pattern::concat` - explicit concatenation insertion
//! - `pattern::postfix` - shunting-yard conversion to postfix form
//! - `nfa::builder` - Thompson construction over a state arena
//! - `nfa::table` - deterministic transition-table rendering
//!
//! The crate performs no file or stream I/O; callers hand in the alphabet
//! and pattern as strings and receive either an [`Nfa`] or an [`Error`].

pub mod alphabet;
pub mod compile;
pub mod nfa;
pub mod pattern;


pub use alphabet::{Alphabet, EPSILON};
pub use compile::compile;
pub use nfa::{Nfa, StateId, Transition, TransitionTable};

/// Errors that can occur during pattern compilation.
///
/// All variants are unrecoverable for the current compilation request.
/// Indices are character offsets into the pattern form the failing stage
/// was consuming (expanded infix for group errors, postfix for arity
/// errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input pattern was empty.
    #[error("pattern is empty")]
    EmptyPattern,

    /// Parenthesis mismatch detected during postfix conversion.
    #[error("unbalanced group delimiter at index {at}")]
    UnbalancedGroup { at: usize },

    /// Operator arity mismatch, or leftover fragments after construction.
    #[error("malformed postfix stream at index {at}")]
    MalformedPostfix { at: usize },

    /// A pattern character that is neither an alphabet member nor a
    /// recognized operator.
    #[error("unknown symbol '{ch}' at index {at}")]
    UnknownSymbol { ch: char, at: usize },
}

/// Result type for compilation operations.
pub type Result<T> = std::result::Result<T, Error>;
