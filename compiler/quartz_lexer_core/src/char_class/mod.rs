//! Byte equivalence classes for the punctuator automaton.
//!
//! Folding all 256 byte values into nine classes shrinks the transition
//! table by roughly two orders of magnitude: bytes that cannot start or
//! continue a symbol (almost all of them) share the single [`Other`]
//! class, and every transition on `Other` leads to the retract state.
//!
//! The class values are load-bearing: a class number is also the index of
//! the automaton's initial state for that byte, which is why the first
//! byte of a symbol needs no transition-table read. See
//! [`State::initial`](crate::tables::State::initial).
//!
//! [`Other`]: CharClass::Other

/// Equivalence class of one input byte.
///
/// The first eight values each cover exactly one symbol byte; [`Other`]
/// covers the remaining 248, including the `0x00` buffer sentinel.
///
/// [`Other`]: CharClass::Other
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CharClass {
    /// `!`
    Bang = 0,
    /// `%`
    Percent = 1,
    /// `&`
    Ampersand = 2,
    /// `+`
    Plus = 3,
    /// `=`
    Equal = 4,
    /// `>`
    Greater = 5,
    /// `^`
    Caret = 6,
    /// `|`
    Pipe = 7,
    /// Any byte that is not part of a symbol. Must stay last; the
    /// transition table's row order depends on it.
    Other = 8,
}

/// Number of equivalence classes, including [`CharClass::Other`].
pub const CLASS_COUNT: usize = 9;

/// Byte-to-class table. Fixed at build time, never mutated.
static CHAR_CLASS_TABLE: [CharClass; 256] = build_char_class_table();

const fn build_char_class_table() -> [CharClass; 256] {
    let mut table = [CharClass::Other; 256];
    table[b'!' as usize] = CharClass::Bang;
    table[b'%' as usize] = CharClass::Percent;
    table[b'&' as usize] = CharClass::Ampersand;
    table[b'+' as usize] = CharClass::Plus;
    table[b'=' as usize] = CharClass::Equal;
    table[b'>' as usize] = CharClass::Greater;
    table[b'^' as usize] = CharClass::Caret;
    table[b'|' as usize] = CharClass::Pipe;
    table
}

// Spot checks; the full mapping is exercised in tests.
const _: () = {
    assert!(CHAR_CLASS_TABLE[b'!' as usize] as u8 == CharClass::Bang as u8);
    assert!(CHAR_CLASS_TABLE[b'%' as usize] as u8 == CharClass::Percent as u8);
    assert!(CHAR_CLASS_TABLE[b'&' as usize] as u8 == CharClass::Ampersand as u8);
    assert!(CHAR_CLASS_TABLE[b'+' as usize] as u8 == CharClass::Plus as u8);
    assert!(CHAR_CLASS_TABLE[b'=' as usize] as u8 == CharClass::Equal as u8);
    assert!(CHAR_CLASS_TABLE[b'>' as usize] as u8 == CharClass::Greater as u8);
    assert!(CHAR_CLASS_TABLE[b'^' as usize] as u8 == CharClass::Caret as u8);
    assert!(CHAR_CLASS_TABLE[b'|' as usize] as u8 == CharClass::Pipe as u8);
    assert!(CHAR_CLASS_TABLE[0] as u8 == CharClass::Other as u8);
};

/// Classify one input byte.
///
/// Total and pure: every byte has exactly one class, and non-symbol bytes
/// (including the sentinel) map to [`CharClass::Other`].
#[inline]
pub fn classify(byte: u8) -> CharClass {
    CHAR_CLASS_TABLE[byte as usize]
}
