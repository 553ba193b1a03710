//! Shunting-yard conversion to postfix (reverse Polish) form.

use crate::{Alphabet, Error, Result};

use super::ops::{GROUP_CLOSE, GROUP_OPEN, Op};

/// Convert a concatenation-expanded infix pattern to postfix.
///
/// Alphabet symbols pass straight to the output. Operators go through an
/// explicit stack ordered by [`Op`] precedence; equal precedence on top of
/// the stack pops before the incoming operator pushes (left-associative).
/// Group delimiters are matched and discarded, never emitted.
///
/// Fails with [`Error::UnbalancedGroup`] when a close delimiter finds no
/// matching open on the stack, or an open delimiter is still parked there
/// after the scan.
pub fn to_postfix(pattern: &str, alphabet: &Alphabet) -> Result<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut stack: Vec<char> = Vec::new();

    for (at, c) in pattern.chars().enumerate() {
        if alphabet.is_symbol(c) {
            out.push(c);
        } else if c == GROUP_OPEN {
            stack.push(c);
        } else if c == GROUP_CLOSE {
            loop {
                match stack.pop() {
                    Some(GROUP_OPEN) => break,
                    Some(op) => out.push(op),
                    None => return Err(Error::UnbalancedGroup { at }),
                }
            }
        } else {
            let incoming = Op::classify(c, at)?;
            while let Some(&top) = stack.last() {
                // An open delimiter classifies as Group, the precedence
                // floor, so it never pops here.
                if Op::classify(top, at)? >= incoming {
                    out.push(top);
                    stack.pop();
                } else {
                    break;
                }
            }
            stack.push(c);
        }
    }

    let end = pattern.chars().count();
    while let Some(op) = stack.pop() {
        if op == GROUP_OPEN {
            return Err(Error::UnbalancedGroup { at: end });
        }
        out.push(op);
    }

    Ok(out)
}
