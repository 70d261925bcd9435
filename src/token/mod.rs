//! Token generation module
//!
//! This module turns uniformly random bytes into uniformly random tokens.
//!
//! It is built around a debiased rejection sampler and exposes two entry
//! points onto the same logic: stateless calls ([`generate`],
//! [`generate_with`]) and a reusable [`TokenGenerator`] handle holding a
//! validated `(length, alphabet)` configuration.
//!
//! ## Uniformity
//!
//! Reducing a random byte onto an alphabet with `byte % size` is only
//! uniform when `size` divides 256 evenly. For every other size the first
//! `256 % size` symbols would be selected slightly more often. The sampler
//! in this module restores exact uniformity by discarding the byte values
//! that cause the skew before mapping; see [`sample`] for the algorithm.
//!
//! Each generation call owns its random-byte buffer and shares no state
//! with other calls, so the module is safe to use concurrently without
//! locking.

mod alphabet;
mod generator;
mod sampler;

/// Ordered sequence of symbols tokens are drawn from.
pub use alphabet::{Alphabet, AlphabetError};

/// Stateless generation calls and the configured generator handle.
pub use generator::{DEFAULT_LENGTH, TokenGenerator, generate, generate_with};

/// The source-parameterized sampling entry point.
pub use sampler::sample;

use thiserror::Error;

use crate::entropy::EntropyError;

/// Errors reported by token generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The alphabet failed validation; no entropy was consumed.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    /// The entropy source failed mid-generation. Surfaced verbatim,
    /// never retried.
    #[error(transparent)]
    EntropyUnavailable(#[from] EntropyError),
}
