//! Canonical transition-table rendering.
//!
//! Output layout, line by line: all display identifiers in ascending
//! creation order, the alphabet string unchanged, the start identifier, the
//! accept identifier, then one `(from,symbol,to)` line per transition in
//! breadth-first order from the start state. A target is marked visited
//! when first enqueued; transitions to already-visited states are still
//! emitted, never deduplicated.

use std::collections::VecDeque;
use std::fmt::Write as _;

use crate::Alphabet;

use super::automaton::{Nfa, StateId};

/// One rendered transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TableRow {
    pub from: char,
    pub symbol: char,
    pub to: char,
}

/// Flattened table view of an automaton, rows in render order.
///
/// Holds exactly the data of the text form, so it doubles as the JSON
/// surface.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TransitionTable {
    /// Display identifiers of every state ever created, ascending.
    pub states: String,
    /// The alphabet token, unchanged.
    pub alphabet: String,
    pub start: char,
    pub accept: char,
    pub transitions: Vec<TableRow>,
}

impl TransitionTable {
    /// Collect the table from a built automaton.
    pub fn new(nfa: &Nfa, alphabet: &Alphabet) -> Self {
        let states: String = (0..nfa.len() as u32)
            .map(|i| StateId(i).display())
            .collect();

        let mut transitions = Vec::with_capacity(nfa.transition_count());
        let mut visited = vec![false; nfa.len()];
        let mut queue = VecDeque::new();

        visited[nfa.start().0 as usize] = true;
        queue.push_back(nfa.start());

        while let Some(id) = queue.pop_front() {
            for t in &nfa.state(id).transitions {
                transitions.push(TableRow {
                    from: id.display(),
                    symbol: t.symbol,
                    to: t.to.display(),
                });
                let target = t.to.0 as usize;
                if !visited[target] {
                    visited[target] = true;
                    queue.push_back(t.to);
                }
            }
        }

        Self {
            states,
            alphabet: alphabet.as_str().to_string(),
            start: nfa.start().display(),
            accept: nfa.accept().display(),
            transitions,
        }
    }

    /// Render the canonical text form. Byte-identical across repeated runs
    /// on the same automaton.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "{}", self.states).unwrap();
        writeln!(out, "{}", self.alphabet).unwrap();
        writeln!(out, "{}", self.start).unwrap();
        writeln!(out, "{}", self.accept).unwrap();
        for row in &self.transitions {
            writeln!(out, "({},{},{})", row.from, row.symbol, row.to).unwrap();
        }
        out
    }
}

/// Table text straight from an automaton.
pub fn render_table(nfa: &Nfa, alphabet: &Alphabet) -> String {
    TransitionTable::new(nfa, alphabet).render()
}
