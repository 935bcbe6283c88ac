//! Punctuator automaton for the Quartz lexer.
//!
//! This crate recognizes the fixed multi-character symbols of Quartz
//! (`!=`, `&&=`, `>>>=`, ...) with a table-driven deterministic finite
//! automaton instead of a character-by-character `match` chain. The owning
//! scanner calls [`try_scan_symbol`] when the cursor might sit on a symbol;
//! everything else (identifiers, numbers, strings, trivia) stays with the
//! scanner.
//!
//! # Lookup order
//!
//! A recognition attempt touches up to four tables, in this order:
//!
//! 1. character classification ([`char_class`])
//! 2. state transitions ([`tables::TRANSITION_TABLE`])
//! 3. dispatch on the state's kind tag (a `match` in [`scan`])
//! 4. token kind for the accepting state ([`tables::STATE_TO_TOKEN`])
//!
//! # Design
//!
//! After classification the automaton is a tree, not a graph: no cycles, and
//! no state reachable through two different inputs. This keeps the tables
//! small and makes "un-read one byte" the only backtracking ever needed.
//!
//! There is no single initial state. The character classes double as initial
//! state indexes, so the first transition comes straight out of the
//! classifier without a transition-table read. See [`tables::State`] for the
//! state encoding and the ordering that makes terminality checks a single
//! comparison.
//!
//! Input is read through a [`Cursor`] over a sentinel-terminated
//! [`SourceBuffer`]: the `0x00` sentinel classifies into the catch-all
//! class, so end of input drives the automaton into its reject/retract path
//! with no bounds check in the loop.

pub mod char_class;
pub mod cursor;
pub mod scan;
pub mod source_buffer;
pub mod tables;
pub mod token;

pub use char_class::CharClass;
pub use cursor::Cursor;
pub use scan::try_scan_symbol;
pub use source_buffer::SourceBuffer;
pub use token::TokenKind;
