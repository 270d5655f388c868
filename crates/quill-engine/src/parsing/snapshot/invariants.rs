use crate::parsing::{Document, blocks::BlockKind};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within source bounds and well formed
/// - Block spans are contiguous, start at 0 and end at the source length
/// - Concatenating the sliced spans reproduces the source exactly
/// - No block other than a literal is made of blank text alone
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &Document) {
    let n = source.len();
    let mut expected_start = 0usize;
    let mut rebuilt = String::with_capacity(n);

    for b in doc.iter() {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            n
        );
        assert_eq!(
            b.span.start, expected_start,
            "gap or overlap before block {:?} at {:?}",
            b.kind.name(),
            b.span
        );
        let text = &source[b.span.start..b.span.end];
        assert!(
            matches!(b.kind, BlockKind::Literal { .. }) || !text.trim().is_empty(),
            "blank {} block at {:?}",
            b.kind.name(),
            b.span
        );
        rebuilt.push_str(text);
        expected_start = b.span.end;
    }

    assert_eq!(
        expected_start, n,
        "blocks end at {expected_start} but source is {n} bytes"
    );
    assert_eq!(rebuilt, source, "concatenated block spans differ from source");
}
