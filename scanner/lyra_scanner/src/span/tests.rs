use super::*;

#[test]
fn new_sets_bounds() {
    let span = Span::new(3, 9);
    assert_eq!(span.start, 3);
    assert_eq!(span.end, 9);
    assert_eq!(span.len(), 6);
    assert!(!span.is_empty());
}

#[test]
fn empty_span() {
    let span = Span::new(5, 5);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

#[test]
fn default_is_zero() {
    assert_eq!(Span::default(), Span::new(0, 0));
}

#[test]
fn range_slices_source() {
    let source = "hello world";
    let span = Span::new(6, 11);
    assert_eq!(&source[span.range()], "world");
}

#[test]
fn renders_as_half_open_range() {
    let span = Span::new(12, 17);
    assert_eq!(format!("{span:?}"), "12..17");
    assert_eq!(span.to_string(), "12..17");
}
