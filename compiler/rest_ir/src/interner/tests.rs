use super::*;
use pretty_assertions::assert_eq;

#[test]
fn new_interner_has_only_empty_string() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.len(), 1);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn interning_is_stable() {
    let mut interner = StringInterner::new();
    let a = interner.intern("orgId");
    let b = interner.intern("teamId");
    let again = interner.intern("orgId");

    assert_eq!(a, again);
    assert_ne!(a, b);
    assert_eq!(interner.lookup(a), "orgId");
    assert_eq!(interner.lookup(b), "teamId");
    assert_eq!(interner.len(), 3);
}

#[test]
fn get_does_not_intern() {
    let mut interner = StringInterner::new();
    assert_eq!(interner.get("Org"), None);
    let org = interner.intern("Org");
    assert_eq!(interner.get("Org"), Some(org));
    assert_eq!(interner.len(), 2);
}

#[test]
fn foreign_name_resolves_to_placeholder() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(99)), "<unknown>");
}

#[test]
fn overflow_error_display() {
    let err = InternError::Overflow { count: 5 };
    assert!(err.to_string().contains("exceeded capacity"));
}
