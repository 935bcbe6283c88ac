//! Token kinds produced by the punctuator automaton.

/// Kind of a recognized punctuator symbol.
///
/// One byte, and the discriminants are not arbitrary: each kind's value
/// equals the table index of the automaton state that accepts it, so
/// [`STATE_TO_TOKEN`](crate::tables::STATE_TO_TOKEN) and this enum stay in
/// lockstep. Single-character kinds are 0-7 (the initial states),
/// two/three-character prefix kinds are 8-13, and the remaining compound
/// kinds are 14-27.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
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

    /// `!=`
    BangEqual = 8,
    /// `&&`
    AmpersandAmpersand = 9,
    /// `==`
    EqualEqual = 10,
    /// `>>`
    GreaterGreater = 11,
    /// `||`
    PipePipe = 12,
    /// `>>>`
    GreaterGreaterGreater = 13,

    /// `%=`
    PercentEqual = 14,
    /// `&=`
    AmpersandEqual = 15,
    /// `++`
    PlusPlus = 16,
    /// `+=`
    PlusEqual = 17,
    /// `=>`
    EqualGreater = 18,
    /// `>=`
    GreaterEqual = 19,
    /// `^=`
    CaretEqual = 20,
    /// `|=`
    PipeEqual = 21,
    /// `!==`
    BangEqualEqual = 22,
    /// `&&=`
    AmpersandAmpersandEqual = 23,
    /// `===`
    EqualEqualEqual = 24,
    /// `>>=`
    GreaterGreaterEqual = 25,
    /// `||=`
    PipePipeEqual = 26,
    /// `>>>=`
    GreaterGreaterGreaterEqual = 27,
}

impl TokenKind {
    /// Number of symbol kinds.
    pub const COUNT: usize = 28;

    /// The symbol's source text. Every kind is a fixed lexeme.
    pub fn lexeme(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::Plus => "+",
            Self::Equal => "=",
            Self::Greater => ">",
            Self::Caret => "^",
            Self::Pipe => "|",
            Self::BangEqual => "!=",
            Self::AmpersandAmpersand => "&&",
            Self::EqualEqual => "==",
            Self::GreaterGreater => ">>",
            Self::PipePipe => "||",
            Self::GreaterGreaterGreater => ">>>",
            Self::PercentEqual => "%=",
            Self::AmpersandEqual => "&=",
            Self::PlusPlus => "++",
            Self::PlusEqual => "+=",
            Self::EqualGreater => "=>",
            Self::GreaterEqual => ">=",
            Self::CaretEqual => "^=",
            Self::PipeEqual => "|=",
            Self::BangEqualEqual => "!==",
            Self::AmpersandAmpersandEqual => "&&=",
            Self::EqualEqualEqual => "===",
            Self::GreaterGreaterEqual => ">>=",
            Self::PipePipeEqual => "||=",
            Self::GreaterGreaterGreaterEqual => ">>>=",
        }
    }

    /// Human-readable description for diagnostics, e.g. `` `!=` ``.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bang => "`!`",
            Self::Percent => "`%`",
            Self::Ampersand => "`&`",
            Self::Plus => "`+`",
            Self::Equal => "`=`",
            Self::Greater => "`>`",
            Self::Caret => "`^`",
            Self::Pipe => "`|`",
            Self::BangEqual => "`!=`",
            Self::AmpersandAmpersand => "`&&`",
            Self::EqualEqual => "`==`",
            Self::GreaterGreater => "`>>`",
            Self::PipePipe => "`||`",
            Self::GreaterGreaterGreater => "`>>>`",
            Self::PercentEqual => "`%=`",
            Self::AmpersandEqual => "`&=`",
            Self::PlusPlus => "`++`",
            Self::PlusEqual => "`+=`",
            Self::EqualGreater => "`=>`",
            Self::GreaterEqual => "`>=`",
            Self::CaretEqual => "`^=`",
            Self::PipeEqual => "`|=`",
            Self::BangEqualEqual => "`!==`",
            Self::AmpersandAmpersandEqual => "`&&=`",
            Self::EqualEqualEqual => "`===`",
            Self::GreaterGreaterEqual => "`>>=`",
            Self::PipePipeEqual => "`||=`",
            Self::GreaterGreaterGreaterEqual => "`>>>=`",
        }
    }
}

#[cfg(test)]
mod tests;
