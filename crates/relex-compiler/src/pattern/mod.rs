//! Infix pattern rewriting.
//!
//! The pattern string goes through two destructive rewrites before
//! construction: raw infix -> infix with explicit concatenation -> postfix.
//! Only one representation is live at a time.

mod concat;
mod ops;
mod postfix;

#[cfg(test)]
mod concat_tests;
#[cfg(test)]
mod postfix_tests;

pub use concat::insert_concat;
pub use ops::{CONCAT, GROUP_CLOSE, GROUP_OPEN, OR, Op, STAR};
pub use postfix::to_postfix;
