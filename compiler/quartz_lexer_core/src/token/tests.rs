use super::*;

// === Discriminants ===

#[test]
fn repr_u8_matches_state_table_indexes() {
    // Single-character symbols: 0-7 (the initial-state group)
    assert_eq!(TokenKind::Bang as u8, 0);
    assert_eq!(TokenKind::Percent as u8, 1);
    assert_eq!(TokenKind::Ampersand as u8, 2);
    assert_eq!(TokenKind::Plus as u8, 3);
    assert_eq!(TokenKind::Equal as u8, 4);
    assert_eq!(TokenKind::Greater as u8, 5);
    assert_eq!(TokenKind::Caret as u8, 6);
    assert_eq!(TokenKind::Pipe as u8, 7);

    // Extendable compounds: 8-13 (the possibly-incomplete state group)
    assert_eq!(TokenKind::BangEqual as u8, 8);
    assert_eq!(TokenKind::AmpersandAmpersand as u8, 9);
    assert_eq!(TokenKind::EqualEqual as u8, 10);
    assert_eq!(TokenKind::GreaterGreater as u8, 11);
    assert_eq!(TokenKind::PipePipe as u8, 12);
    assert_eq!(TokenKind::GreaterGreaterGreater as u8, 13);

    // Complete compounds: 14-27 (the unique-terminal state group)
    assert_eq!(TokenKind::PercentEqual as u8, 14);
    assert_eq!(TokenKind::GreaterGreaterGreaterEqual as u8, 27);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Lexeme ===

#[test]
fn single_char_lexemes() {
    assert_eq!(TokenKind::Bang.lexeme(), "!");
    assert_eq!(TokenKind::Percent.lexeme(), "%");
    assert_eq!(TokenKind::Ampersand.lexeme(), "&");
    assert_eq!(TokenKind::Plus.lexeme(), "+");
    assert_eq!(TokenKind::Equal.lexeme(), "=");
    assert_eq!(TokenKind::Greater.lexeme(), ">");
    assert_eq!(TokenKind::Caret.lexeme(), "^");
    assert_eq!(TokenKind::Pipe.lexeme(), "|");
}

#[test]
fn compound_lexemes() {
    assert_eq!(TokenKind::BangEqual.lexeme(), "!=");
    assert_eq!(TokenKind::AmpersandAmpersand.lexeme(), "&&");
    assert_eq!(TokenKind::EqualEqual.lexeme(), "==");
    assert_eq!(TokenKind::GreaterGreater.lexeme(), ">>");
    assert_eq!(TokenKind::PipePipe.lexeme(), "||");
    assert_eq!(TokenKind::GreaterGreaterGreater.lexeme(), ">>>");
    assert_eq!(TokenKind::PercentEqual.lexeme(), "%=");
    assert_eq!(TokenKind::AmpersandEqual.lexeme(), "&=");
    assert_eq!(TokenKind::PlusPlus.lexeme(), "++");
    assert_eq!(TokenKind::PlusEqual.lexeme(), "+=");
    assert_eq!(TokenKind::EqualGreater.lexeme(), "=>");
    assert_eq!(TokenKind::GreaterEqual.lexeme(), ">=");
    assert_eq!(TokenKind::CaretEqual.lexeme(), "^=");
    assert_eq!(TokenKind::PipeEqual.lexeme(), "|=");
    assert_eq!(TokenKind::BangEqualEqual.lexeme(), "!==");
    assert_eq!(TokenKind::AmpersandAmpersandEqual.lexeme(), "&&=");
    assert_eq!(TokenKind::EqualEqualEqual.lexeme(), "===");
    assert_eq!(TokenKind::GreaterGreaterEqual.lexeme(), ">>=");
    assert_eq!(TokenKind::PipePipeEqual.lexeme(), "||=");
    assert_eq!(TokenKind::GreaterGreaterGreaterEqual.lexeme(), ">>>=");
}

#[test]
fn lexeme_lengths_follow_the_state_groups() {
    use crate::tables::STATE_TO_TOKEN;
    for (index, kind) in STATE_TO_TOKEN.iter().enumerate() {
        let len = kind.lexeme().len();
        match index {
            0..=7 => assert_eq!(len, 1, "{kind:?}"),
            8..=12 => assert_eq!(len, 2, "{kind:?}"),
            13 => assert_eq!(len, 3, "{kind:?}"), // >>>
            _ => assert!((2..=4).contains(&len), "{kind:?}"),
        }
    }
}

// === Name ===

#[test]
fn name_is_backticked_lexeme() {
    assert_eq!(TokenKind::Bang.name(), "`!`");
    assert_eq!(TokenKind::BangEqual.name(), "`!=`");
    assert_eq!(TokenKind::GreaterGreaterGreaterEqual.name(), "`>>>=`");
    for kind in crate::tables::STATE_TO_TOKEN {
        assert_eq!(kind.name(), format!("`{}`", kind.lexeme()));
    }
}
