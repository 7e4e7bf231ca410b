use super::*;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(Span::DUMMY.is_empty());
}

#[test]
fn span_merge_covers_both() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn try_from_range_accepts_u32_offsets() {
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn try_from_range_rejects_large_offsets() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(too_big..too_big),
        Err(SpanError::StartTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
}

#[test]
fn span_formats_as_range() {
    assert_eq!(format!("{}", Span::new(1, 4)), "1..4");
    assert_eq!(format!("{:?}", Span::new(1, 4)), "1..4");
}
