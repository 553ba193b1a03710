//! Graphviz rendering for debugging.
//!
//! States appear in identifier order and edges in insertion order, so the
//! output is deterministic without relying on the table's BFS.

use std::fmt::Write as _;

use super::automaton::Nfa;

/// Render the automaton as a Graphviz digraph.
pub fn to_dot(nfa: &Nfa) -> String {
    let mut out = String::new();
    out.push_str("digraph nfa {\n");
    out.push_str("rankdir=LR;\n");
    out.push_str("empty [label = \"\" shape = plaintext];\n");
    writeln!(out, "node [shape = doublecircle]; {};", nfa.accept()).unwrap();
    out.push_str("node [shape = circle];\n");
    writeln!(out, "empty -> {} [label = \"start\"];", nfa.start()).unwrap();

    for (id, state) in nfa.states() {
        for t in &state.transitions {
            if t.is_epsilon() {
                writeln!(out, "{} -> {} [label = \"\u{3b5}\"];", id, t.to).unwrap();
            } else {
                writeln!(out, "{} -> {} [label = \"{}\"];", id, t.to, t.symbol).unwrap();
            }
        }
    }

    out.push_str("}\n");
    out
}
