//! The automaton's lookup loop.

use crate::char_class::{classify, CharClass};
use crate::cursor::Cursor;
use crate::tables::{token_for, Dispatch, State, TRANSITION_TABLE};
use crate::token::TokenKind;

/// Try to recognize one punctuator symbol at the cursor.
///
/// On success, returns the symbol's kind with the cursor advanced to the
/// byte immediately after it. On failure the cursor is untouched and the
/// caller falls back to its other lexical rules (identifiers, numbers,
/// and so on).
///
/// Matching is greedy: the longest symbol wins, a byte at a time, and a
/// failed longer match costs exactly one byte of retraction (`>>>x`
/// accepts `>>>` and leaves the cursor on `x`). The tables guarantee a
/// dead end is detected one byte after the last valid prefix, so no
/// deeper backtracking exists.
///
/// End of input needs no separate branch: the buffer sentinel classifies
/// into the catch-all class, which forces the retract path and accepts
/// whatever prefix was already read.
pub fn try_scan_symbol(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    let class = classify(cursor.current());
    if matches!(class, CharClass::Other) {
        // Not a symbol byte (or EOF). Nothing consumed.
        return None;
    }

    // The first lookup is special. There is no single initial state:
    // character classes double as initial-state indexes, so the class of
    // the first byte *is* the first transition and the table is not read.
    let mut state = State::initial(class);
    cursor.advance();
    if state.is_initial_terminal() {
        // No initial state is terminal today, but the table format
        // supports it.
        return Some(token_for(state));
    }

    loop {
        let prev = state;
        let class = classify(cursor.current());
        state = TRANSITION_TABLE[class as usize][prev.index()];
        cursor.advance();
        match state.dispatch() {
            Dispatch::Transition => {}
            Dispatch::Retract => {
                // The byte just consumed does not extend the symbol. Give
                // it back and accept the state we were in before it. That
                // state always bears a token: reaching retract from a
                // non-token state would be a hole in the tables.
                cursor.retract();
                debug_assert!(matches!(
                    prev.dispatch(),
                    Dispatch::Transition | Dispatch::UniqueTerminal
                ));
                return Some(token_for(prev));
            }
            Dispatch::UniqueTerminal => return Some(token_for(state)),
        }
    }
}
