//! NFA construction and rendering.
//!
//! - `automaton` - arena-backed state graph
//! - `builder` - Thompson construction from the postfix stream
//! - `table` - canonical transition-table text
//! - `dot` - Graphviz rendering for debugging

mod automaton;
mod builder;
mod dot;
mod table;

#[cfg(test)]
mod builder_tests;

pub use automaton::{ID_BASE, Nfa, State, StateId, Transition};
pub use builder::build;
pub use dot::to_dot;
pub use table::{TableRow, TransitionTable, render_table};
