use crate::alphabet::EPSILON;
use crate::{Alphabet, Error};

use super::automaton::{Nfa, StateId};
use super::build;

fn build_ab(postfix: &str) -> Result<Nfa, Error> {
    build(postfix, &Alphabet::new("ab"))
}

#[test]
fn literal() {
    let nfa = build_ab("a").unwrap();
    assert_eq!(nfa.len(), 2);
    assert_eq!(nfa.transition_count(), 1);
    assert_eq!(nfa.start(), StateId(0));
    assert_eq!(nfa.accept(), StateId(1));

    let t = nfa.state(nfa.start()).transitions[0];
    assert_eq!(t.symbol, 'a');
    assert_eq!(t.to, nfa.accept());
}

#[test]
fn concatenation() {
    // ab. : two literal fragments joined by a single epsilon
    let nfa = build_ab("ab.").unwrap();
    assert_eq!(nfa.len(), 4);
    assert_eq!(nfa.transition_count(), 3);
    assert_eq!(nfa.epsilon_count(), 1);
    assert_eq!(nfa.start(), StateId(0));
    assert_eq!(nfa.accept(), StateId(3));

    // The epsilon links the first literal's end to the second's start.
    let link = nfa.state(StateId(1)).transitions[0];
    assert_eq!(link.symbol, EPSILON);
    assert_eq!(link.to, StateId(2));
}

#[test]
fn alternation() {
    // ab| : 2 states per literal plus a fresh fork and join
    let nfa = build_ab("ab|").unwrap();
    assert_eq!(nfa.len(), 6);
    assert_eq!(nfa.transition_count(), 6);
    assert_eq!(nfa.epsilon_count(), 4);
    assert_eq!(nfa.start(), StateId(4));
    assert_eq!(nfa.accept(), StateId(5));

    // Fork order follows operand order: left branch first.
    let fork = &nfa.state(nfa.start()).transitions;
    assert_eq!(fork.len(), 2);
    assert_eq!(fork[0].to, StateId(0));
    assert_eq!(fork[1].to, StateId(2));
    assert!(fork.iter().all(|t| t.is_epsilon()));
}

#[test]
fn star() {
    let nfa = build("a*", &Alphabet::new("a")).unwrap();
    assert_eq!(nfa.len(), 4);
    // The literal transition plus four epsilons: enter, skip, exit, repeat.
    assert_eq!(nfa.transition_count(), 5);
    assert_eq!(nfa.epsilon_count(), 4);
    assert_eq!(nfa.start(), StateId(2));
    assert_eq!(nfa.accept(), StateId(3));

    // Back-edge: the inner fragment's end loops to its start.
    let exits = &nfa.state(StateId(1)).transitions;
    assert_eq!(exits[0].to, nfa.accept());
    assert_eq!(exits[1].to, StateId(0));
}

#[test]
fn identifiers_are_contiguous() {
    let nfa = build_ab("ab|a.b.").unwrap();
    let ids: Vec<u32> = nfa.states().map(|(id, _)| id.0).collect();
    let expected: Vec<u32> = (0..nfa.len() as u32).collect();
    assert_eq!(ids, expected);
}

#[test]
fn operator_underflow_fails() {
    assert_eq!(build_ab(".").unwrap_err(), Error::MalformedPostfix { at: 0 });
    assert_eq!(build_ab("a|").unwrap_err(), Error::MalformedPostfix { at: 1 });
    assert_eq!(build_ab("*").unwrap_err(), Error::MalformedPostfix { at: 0 });
}

#[test]
fn leftover_fragments_fail() {
    assert_eq!(build_ab("ab").unwrap_err(), Error::MalformedPostfix { at: 2 });
}

#[test]
fn empty_stream_fails() {
    assert_eq!(build_ab("").unwrap_err(), Error::MalformedPostfix { at: 0 });
}

#[test]
fn non_alphabet_token_fails() {
    assert_eq!(
        build_ab("ac.").unwrap_err(),
        Error::UnknownSymbol { ch: 'c', at: 1 }
    );
}
