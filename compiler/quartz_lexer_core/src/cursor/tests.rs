use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new(">>=");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'>');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new(">>=");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'>');
    assert_eq!(cursor.pos(), 1);
    cursor.advance();
    assert_eq!(cursor.current(), b'=');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn retract_moves_back() {
    let buf = SourceBuffer::new("+=x");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), b'x');
    cursor.retract();
    assert_eq!(cursor.current(), b'=');
    assert_eq!(cursor.pos(), 1);
}

#[test]
#[should_panic(expected = "retract at position 0")]
#[cfg(debug_assertions)]
fn retract_at_start_is_a_contract_violation() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.retract();
}

#[test]
fn copy_snapshot_is_independent() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(snapshot.current(), b'a');
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance(); // past 'x', at sentinel
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance(); // at '\0' (interior null)
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof()); // pos=1 < source_len=3
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn source_len_is_visible() {
    let buf = SourceBuffer::new("&&=");
    let cursor = buf.cursor();
    assert_eq!(cursor.source_len(), 3);
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("a >>>= b");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 6), ">>>=");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("!==");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.slice_from(0), "!=");
    assert_eq!(cursor.slice_from(1), "=");
}

#[test]
fn slice_empty_range() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 2), "");
}
