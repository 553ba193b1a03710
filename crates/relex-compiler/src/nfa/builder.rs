//! Thompson construction from the postfix stream.
//!
//! One push/pop rule per token. Fragments pair an entry and an exit state
//! not yet wired to the rest of the automaton; operators pop operand
//! fragments, wire them with epsilon transitions, and push the combined
//! fragment. The stream is well-formed iff every pop succeeds and exactly
//! one fragment remains at the end.

use crate::alphabet::EPSILON;
use crate::pattern::{CONCAT, OR, STAR};
use crate::{Alphabet, Error, Result};

use super::automaton::{Nfa, State, StateId, Transition};

/// Sub-automaton with exactly one entry and one exit state.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: StateId,
    end: StateId,
}

/// Builder state: the arena and the fragment stack.
///
/// The next state identifier is implicit in the arena length, so
/// identifiers are sequential from zero and scoped to one construction
/// run.
#[derive(Debug, Default)]
struct Builder {
    states: Vec<State>,
    stack: Vec<Fragment>,
}

impl Builder {
    fn fresh_state(&mut self) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::default());
        id
    }

    fn connect(&mut self, from: StateId, symbol: char, to: StateId) {
        self.states[from.0 as usize]
            .transitions
            .push(Transition { symbol, to });
    }

    fn pop(&mut self, at: usize) -> Result<Fragment> {
        self.stack.pop().ok_or(Error::MalformedPostfix { at })
    }

    /// Pop both operands of a binary operator. B comes off first: it was
    /// pushed after A, so it is the right operand.
    fn pop_pair(&mut self, at: usize) -> Result<(Fragment, Fragment)> {
        let b = self.pop(at)?;
        let a = self.pop(at)?;
        Ok((a, b))
    }

    /// Literal symbol: two fresh states joined by one labeled transition.
    fn literal(&mut self, symbol: char) {
        let start = self.fresh_state();
        let end = self.fresh_state();
        self.connect(start, symbol, end);
        self.stack.push(Fragment { start, end });
    }

    /// Concatenation: A's exit flows into B's entry. No new states.
    fn concat(&mut self, at: usize) -> Result<()> {
        let (a, b) = self.pop_pair(at)?;
        self.connect(a.end, EPSILON, b.start);
        self.stack.push(Fragment {
            start: a.start,
            end: b.end,
        });
        Ok(())
    }

    /// Alternation: a fresh entry forks into both operands, both exits
    /// rejoin at a fresh exit.
    fn alternate(&mut self, at: usize) -> Result<()> {
        let (a, b) = self.pop_pair(at)?;
        let start = self.fresh_state();
        let end = self.fresh_state();
        self.connect(start, EPSILON, a.start);
        self.connect(start, EPSILON, b.start);
        self.connect(a.end, EPSILON, end);
        self.connect(b.end, EPSILON, end);
        self.stack.push(Fragment { start, end });
        Ok(())
    }

    /// Kleene star: enter once or skip entirely; exit after one or more
    /// repetitions, or loop back for another.
    fn star(&mut self, at: usize) -> Result<()> {
        let a = self.pop(at)?;
        let start = self.fresh_state();
        let end = self.fresh_state();
        self.connect(start, EPSILON, a.start);
        self.connect(start, EPSILON, end);
        self.connect(a.end, EPSILON, end);
        self.connect(a.end, EPSILON, a.start);
        self.stack.push(Fragment { start, end });
        Ok(())
    }
}

/// Build an automaton from a postfix token stream.
///
/// Fails with [`Error::MalformedPostfix`] when an operator pops more
/// fragments than are present or more than one fragment remains at the
/// end, and with [`Error::UnknownSymbol`] when a non-operator token is not
/// an alphabet member.
pub fn build(postfix: &str, alphabet: &Alphabet) -> Result<Nfa> {
    let mut builder = Builder::default();

    for (at, c) in postfix.chars().enumerate() {
        match c {
            CONCAT => builder.concat(at)?,
            OR => builder.alternate(at)?,
            STAR => builder.star(at)?,
            _ if alphabet.is_symbol(c) => builder.literal(c),
            _ => return Err(Error::UnknownSymbol { ch: c, at }),
        }
    }

    let end = postfix.chars().count();
    let fragment = builder.pop(end)?;
    if !builder.stack.is_empty() {
        return Err(Error::MalformedPostfix { at: end });
    }

    Ok(Nfa::new(builder.states, fragment.start, fragment.end))
}
