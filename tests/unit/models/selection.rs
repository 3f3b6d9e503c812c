use super::*;

#[test]
fn none_has_no_range() {
    assert!(SelectedRange::NONE.is_none());
    assert_eq!(SelectedRange::NONE.as_range(), None);
    assert_eq!(MarkedRange::default(), MarkedRange::NONE);
}

#[test]
fn ranges_are_half_open() {
    assert_eq!(SelectedRange::new(4, 3).as_range(), Some(4..7));
    assert_eq!(MarkedRange::new(0, 0).as_range(), Some(0..0));
    assert!(!MarkedRange::new(0, 0).is_none());
}
