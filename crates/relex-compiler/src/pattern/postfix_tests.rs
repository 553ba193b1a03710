use crate::{Alphabet, Error};

use super::to_postfix;

fn post(expanded: &str) -> Result<String, Error> {
    let alphabet = Alphabet::new("abc");
    to_postfix(expanded, &alphabet)
}

#[test]
fn concatenation() {
    assert_eq!(post("a.b").unwrap(), "ab.");
    assert_eq!(post("a.b.c").unwrap(), "ab.c.");
}

#[test]
fn alternation() {
    assert_eq!(post("a|b").unwrap(), "ab|");
}

#[test]
fn star() {
    assert_eq!(post("a*").unwrap(), "a*");
    assert_eq!(post("a*.b").unwrap(), "a*b.");
}

#[test]
fn concat_binds_tighter_than_or() {
    assert_eq!(post("a|b.c").unwrap(), "abc.|");
    assert_eq!(post("a.b|c").unwrap(), "ab.c|");
}

#[test]
fn groups_override_precedence() {
    assert_eq!(post("(a|b).c").unwrap(), "ab|c.");
    assert_eq!(post("a.(b|c)").unwrap(), "abc|.");
}

#[test]
fn group_delimiters_are_discarded() {
    assert_eq!(post("(a)").unwrap(), "a");
    assert_eq!(post("((a))").unwrap(), "a");
}

#[test]
fn unmatched_close_fails() {
    assert_eq!(post("a)"), Err(Error::UnbalancedGroup { at: 1 }));
    assert_eq!(post(")"), Err(Error::UnbalancedGroup { at: 0 }));
}

#[test]
fn unmatched_open_fails() {
    assert_eq!(post("(a"), Err(Error::UnbalancedGroup { at: 2 }));
    assert_eq!(post("(a|b"), Err(Error::UnbalancedGroup { at: 4 }));
}

#[test]
fn unknown_symbol_fails() {
    assert_eq!(post("a+b"), Err(Error::UnknownSymbol { ch: '+', at: 1 }));
}
