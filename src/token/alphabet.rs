//! Alphabet definition and validation.
//!
//! An alphabet is the ordered sequence of symbols a token is drawn from.
//! Validation happens exactly once, at construction; every [`Alphabet`]
//! value in existence satisfies the size bound, so the sampler never has
//! to re-check it.

use thiserror::Error;

/// The 62-symbol default alphabet: uppercase, lowercase, digits, in that
/// concatenation order.
const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Lowercase hexadecimal digits.
const HEX_LOWER: &str = "0123456789abcdef";

/// Errors that can occur during alphabet validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    /// Fewer than [`Alphabet::MIN_SYMBOLS`] symbols were supplied. A
    /// single-symbol alphabet can only produce one token and carries no
    /// entropy.
    #[error("alphabet has {count} symbols, need at least 2")]
    TooFewSymbols { count: usize },

    /// More than [`Alphabet::MAX_SYMBOLS`] symbols were supplied. The
    /// sampler selects symbols with single bytes, which cannot address
    /// more than 256 positions.
    #[error("alphabet has {count} symbols, at most 256 are supported")]
    TooManySymbols { count: usize },
}

/// An ordered, validated sequence of symbols.
///
/// The sequence is immutable once constructed and holds between 2 and 256
/// symbol *positions*. Duplicates are permitted and deliberately not
/// deduplicated: a repeated symbol occupies several positions and is
/// selected proportionally more often. Callers wanting uniformity per
/// distinct symbol must supply each symbol once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Box<[char]>,
}

impl Alphabet {
    /// Minimum number of symbol positions.
    pub const MIN_SYMBOLS: usize = 2;

    /// Maximum number of symbol positions.
    pub const MAX_SYMBOLS: usize = 256;

    /// Creates an alphabet from a flat string, one symbol per `char`.
    ///
    /// # Errors
    /// Returns an [`AlphabetError`] if the string holds fewer than 2 or
    /// more than 256 characters.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        Self::from_symbols(symbols.chars().collect())
    }

    /// Creates an alphabet from an explicit ordered symbol sequence.
    ///
    /// # Errors
    /// Returns an [`AlphabetError`] if the sequence holds fewer than 2 or
    /// more than 256 symbols.
    pub fn from_symbols(symbols: Vec<char>) -> Result<Self, AlphabetError> {
        let count = symbols.len();

        if count < Self::MIN_SYMBOLS {
            return Err(AlphabetError::TooFewSymbols { count });
        }

        if count > Self::MAX_SYMBOLS {
            return Err(AlphabetError::TooManySymbols { count });
        }

        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// The 16-symbol lowercase hexadecimal alphabet.
    pub fn hex() -> Self {
        Self {
            symbols: HEX_LOWER.chars().collect(),
        }
    }

    /// Number of symbol positions, duplicates included.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol at `index`.
    ///
    /// Callers must pass an index below [`size`](Self::size); the sampler
    /// guarantees this by reducing bytes modulo the size.
    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }
}

impl Default for Alphabet {
    /// The 62-symbol alphanumeric alphabet `A–Z a–z 0–9`.
    fn default() -> Self {
        Self {
            symbols: ALPHANUMERIC.chars().collect(),
        }
    }
}
