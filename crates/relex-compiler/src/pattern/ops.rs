//! Operator characters and their precedence.

use crate::{Error, Result};

/// Concatenation operator, inserted by [`super::insert_concat`].
pub const CONCAT: char = '.';
/// Alternation operator.
pub const OR: char = '|';
/// Postfix Kleene star.
pub const STAR: char = '*';
/// Opening group delimiter.
pub const GROUP_OPEN: char = '(';
/// Closing group delimiter.
pub const GROUP_CLOSE: char = ')';

/// Operator precedence, lowest to highest.
///
/// The derived `Ord` is the precedence order. `Group` sits below everything
/// so an open delimiter parked on the operator stack never pops on a
/// precedence comparison; it is only removed by its matching close
/// delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Op {
    Group,
    Or,
    Concat,
    Star,
}

impl Op {
    /// Classify an operator character at pattern index `at`.
    ///
    /// Characters that are neither alphabet symbols (the caller's check) nor
    /// recognized operators fail with [`Error::UnknownSymbol`] rather than
    /// silently defaulting to some precedence.
    pub fn classify(c: char, at: usize) -> Result<Self> {
        match c {
            OR => Ok(Op::Or),
            CONCAT => Ok(Op::Concat),
            STAR => Ok(Op::Star),
            GROUP_OPEN | GROUP_CLOSE => Ok(Op::Group),
            _ => Err(Error::UnknownSymbol { ch: c, at }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(Op::Group < Op::Or);
        assert!(Op::Or < Op::Concat);
        assert!(Op::Concat < Op::Star);
    }

    #[test]
    fn classify_operators() {
        assert_eq!(Op::classify('|', 0), Ok(Op::Or));
        assert_eq!(Op::classify('.', 0), Ok(Op::Concat));
        assert_eq!(Op::classify('*', 0), Ok(Op::Star));
        assert_eq!(Op::classify('(', 0), Ok(Op::Group));
        assert_eq!(Op::classify(')', 0), Ok(Op::Group));
    }

    #[test]
    fn classify_rejects_unknown() {
        assert_eq!(
            Op::classify('+', 3),
            Err(Error::UnknownSymbol { ch: '+', at: 3 })
        );
    }
}
