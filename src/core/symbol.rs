//! Alphabet symbols.
//!
//! Every component of the machine operates over the 26 uppercase letters.
//! `Symbol` is validated once at the boundary so the substitution pipeline
//! never has to re-check its input.

use super::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symbols in the machine alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// A single uppercase letter `A`–`Z`.
///
/// Arithmetic on symbols wraps modulo 26, mirroring a rotor turning past `Z`
/// back to `A`.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::core::Symbol;
///
/// let z = Symbol::try_from('Z').unwrap();
/// assert_eq!(z.shifted(1), Symbol::try_from('A').unwrap());
/// assert_eq!(z.index(), 25);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(u8);

impl Symbol {
    /// The first letter of the alphabet, used as the neutral rotor position.
    pub const A: Symbol = Symbol(0);

    /// Build a symbol from its zero-based index, wrapping out-of-range values.
    pub fn from_index(index: i32) -> Self {
        Symbol(index.rem_euclid(ALPHABET_LEN as i32) as u8)
    }

    /// Zero-based position in the alphabet (`A` = 0).
    pub fn index(self) -> u8 {
        self.0
    }

    /// The symbol `offset` places further along the alphabet, wrapping at `Z`.
    pub fn shifted(self, offset: i32) -> Self {
        Self::from_index(self.0 as i32 + offset)
    }

    /// The symbol as an uppercase `char`.
    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterate the whole alphabet in order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..ALPHABET_LEN).map(Symbol)
    }

    /// Parse every character of `text`, failing on the first non-letter.
    pub fn parse_text(text: &str) -> Result<Vec<Symbol>, CoreError> {
        text.chars().map(Symbol::try_from).collect()
    }
}

impl TryFrom<char> for Symbol {
    type Error = CoreError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_uppercase() {
            Ok(Symbol(c as u8 - b'A'))
        } else {
            Err(CoreError::InvalidSymbol(c))
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.as_char()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.as_char())
    }
}
