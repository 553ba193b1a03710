//! Arena-backed automaton types.
//!
//! States live in a flat arena and reference each other by index. The star
//! construction creates a cyclic transition graph, but indices keep the
//! ownership graph acyclic: the automaton owns every state it ever created,
//! transitions only point.

use crate::alphabet::EPSILON;

/// Base of the display-identifier range. State 0 renders as `a`, state 1 as
/// `b`, and so on.
pub const ID_BASE: char = 'a';

/// Arena index of a state.
///
/// Identifiers are assigned in creation order within one construction run
/// and never reused, so the allocated range is contiguous from zero. The
/// display form offsets [`ID_BASE`] by the index; past index 25 it keeps
/// walking the char code space rather than staying alphabetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub u32);

impl StateId {
    /// Single-character display identifier.
    pub fn display(self) -> char {
        char::from_u32(ID_BASE as u32 + self.0)
            .expect("state index exceeds the displayable identifier range")
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Directed labeled edge, owned by its source state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Literal alphabet symbol, or [`EPSILON`].
    pub symbol: char,
    pub to: StateId,
}

impl Transition {
    pub fn is_epsilon(&self) -> bool {
        self.symbol == EPSILON
    }
}

/// One NFA state: outgoing transitions in insertion order.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub transitions: Vec<Transition>,
}

/// Completed automaton: a state arena plus distinguished start and accept
/// states. Immutable once built; exactly one of each.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    pub(crate) fn new(states: Vec<State>, start: StateId, accept: StateId) -> Self {
        debug_assert!((start.0 as usize) < states.len());
        debug_assert!((accept.0 as usize) < states.len());
        Self {
            states,
            start,
            accept,
        }
    }

    /// Number of states ever created for this automaton.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// A built automaton always has at least its start and accept states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0 as usize]
    }

    /// States in identifier order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId(i as u32), s))
    }

    /// Total transition count across all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    /// Epsilon transition count across all states.
    pub fn epsilon_count(&self) -> usize {
        self.states
            .iter()
            .flat_map(|s| &s.transitions)
            .filter(|t| t.is_epsilon())
            .count()
    }
}
