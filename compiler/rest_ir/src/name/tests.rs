use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_is_zero() {
    assert_eq!(Name::EMPTY.raw(), 0);
    assert_eq!(Name::default(), Name::EMPTY);
}

#[test]
fn raw_round_trip_preserves_ordering() {
    let a = Name::from_raw(3);
    let b = Name::from_raw(7);
    assert!(a < b);
    assert_eq!(Name::from_raw(a.raw()), a);
}

#[test]
fn debug_shows_index() {
    assert_eq!(format!("{:?}", Name::from_raw(12)), "Name(12)");
}
