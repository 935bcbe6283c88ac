use super::*;

// === Construction ===

#[test]
fn len_and_emptiness() {
    let buf = SourceBuffer::new(">>>=");
    assert_eq!(buf.len(), 4);
    assert!(!buf.is_empty());

    let empty = SourceBuffer::new("");
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

#[test]
fn as_bytes_round_trips_the_source() {
    let source = "a != b && c";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

#[test]
fn sentinel_follows_the_content() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("x");
    assert_eq!(buf.cursor().pos(), 0);
}

// === Padding boundaries ===

#[test]
fn sources_near_the_cache_line_boundary() {
    // 63 bytes of content leaves exactly one byte for the sentinel in the
    // first cache line; 64 forces a second line.
    for len in [62, 63, 64, 65, 127, 128] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(buf.len() as usize, len);
        let mut cursor = buf.cursor();
        for _ in 0..len {
            assert!(!cursor.is_eof());
            cursor.advance();
        }
        assert!(cursor.is_eof(), "len {len}");
    }
}

// === Interior nulls ===

#[test]
fn interior_nulls_are_recorded() {
    let buf = SourceBuffer::new("a\0b\0");
    assert_eq!(buf.interior_nulls(), &[1, 3]);
}

#[test]
fn clean_source_has_no_interior_nulls() {
    let buf = SourceBuffer::new("a || b");
    assert!(buf.interior_nulls().is_empty());
}
