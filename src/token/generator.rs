//! Public generation API.
//!
//! Two surfaces onto the same sampler: stateless free functions drawing
//! from the OS entropy source, and [`TokenGenerator`], a small immutable
//! value holding a validated `(length, alphabet)` configuration for
//! repeated use.

use crate::entropy::{EntropySource, OsEntropy};
use crate::token::TokenError;
use crate::token::alphabet::Alphabet;
use crate::token::sampler::sample;

/// Default token length.
///
/// At 62 symbols per position a token carries log2(62) ≈ 5.954 bits of
/// entropy per symbol, so 43 symbols are needed to exceed 256 bits; 44
/// adds one symbol of margin.
pub const DEFAULT_LENGTH: usize = 44;

/// Generates a 44-symbol token over the default alphanumeric alphabet,
/// using the OS entropy source.
///
/// # Errors
/// Returns [`TokenError::EntropyUnavailable`] if the OS facility fails.
pub fn generate() -> Result<String, TokenError> {
    generate_with(DEFAULT_LENGTH, &Alphabet::default())
}

/// Generates a `length`-symbol token over `alphabet`, using the OS
/// entropy source.
///
/// A `length` of zero yields an empty token without touching the entropy
/// source.
///
/// # Errors
/// Returns [`TokenError::EntropyUnavailable`] if the OS facility fails.
pub fn generate_with(length: usize, alphabet: &Alphabet) -> Result<String, TokenError> {
    let mut source = OsEntropy::new();

    sample(&mut source, alphabet, length)
}

/// A reusable token generator bound to one configuration.
///
/// Holds a validated `(length, alphabet)` pair and nothing else: no
/// entropy state, no buffers. Every [`get`](Self::get) call samples
/// independently, so a generator can be shared freely across call sites.
#[derive(Clone, Debug)]
pub struct TokenGenerator {
    length: usize,
    alphabet: Alphabet,
}

impl TokenGenerator {
    /// Creates a generator producing `length`-symbol tokens over
    /// `alphabet`.
    pub fn new(length: usize, alphabet: Alphabet) -> Self {
        Self { length, alphabet }
    }

    /// Creates a generator with the default configuration: 44 symbols
    /// over the alphanumeric alphabet.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_LENGTH, Alphabet::default())
    }

    /// Configured token length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Configured alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generates a token with the bound configuration, using the OS
    /// entropy source.
    ///
    /// # Errors
    /// Returns [`TokenError::EntropyUnavailable`] if the OS facility
    /// fails.
    pub fn get(&self) -> Result<String, TokenError> {
        let mut source = OsEntropy::new();

        self.get_from(&mut source)
    }

    /// Generates a token with the bound configuration, drawing bytes from
    /// the supplied source.
    ///
    /// # Errors
    /// Returns [`TokenError::EntropyUnavailable`] if `source` fails.
    pub fn get_from<S: EntropySource>(&self, source: &mut S) -> Result<String, TokenError> {
        sample(source, &self.alphabet, self.length)
    }
}

impl Default for TokenGenerator {
    /// Equivalent to [`TokenGenerator::with_defaults`].
    fn default() -> Self {
        Self::with_defaults()
    }
}
