use crate::{Alphabet, Error};

use super::insert_concat;

fn expand(pattern: &str) -> String {
    let alphabet = Alphabet::new("abc");
    insert_concat(pattern, &alphabet).unwrap()
}

#[test]
fn adjacent_symbols() {
    assert_eq!(expand("ab"), "a.b");
    assert_eq!(expand("abc"), "a.b.c");
}

#[test]
fn symbol_before_group() {
    assert_eq!(expand("a(b)"), "a.(b)");
}

#[test]
fn group_before_symbol() {
    assert_eq!(expand("(a)b"), "(a).b");
}

#[test]
fn star_before_symbol() {
    assert_eq!(expand("a*b"), "a*.b");
}

#[test]
fn explicit_operators_untouched() {
    assert_eq!(expand("a|b"), "a|b");
    assert_eq!(expand("(a|b)"), "(a|b)");
}

#[test]
fn mixed() {
    assert_eq!(expand("(a|b)c*"), "(a|b).c*");
    assert_eq!(expand("a*(b|c)"), "a*.(b|c)");
}

#[test]
fn single_character_unchanged() {
    assert_eq!(expand("a"), "a");
    assert_eq!(expand("*"), "*");
}

#[test]
fn empty_pattern_fails() {
    let alphabet = Alphabet::new("ab");
    assert_eq!(insert_concat("", &alphabet), Err(Error::EmptyPattern));
}
