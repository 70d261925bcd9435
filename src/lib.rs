//! Cryptographically secure token generation.
//!
//! This crate produces random tokens of a requested length, with every
//! symbol drawn independently and uniformly from a caller-supplied
//! alphabet. Randomness comes from the operating system's secure entropy
//! facility; the crate itself implements no generator and manages no
//! entropy pool.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than on a large API. The one non-trivial piece is the debiased
//! rejection sampler in [`token`], which maps uniformly random bytes onto
//! alphabets whose size does not evenly divide 256 without introducing
//! modulo bias.
//!
//! # Module overview
//!
//! - `entropy`
//!   The secure entropy source boundary. Defines the [`entropy::EntropySource`]
//!   trait and the OS-backed implementation used by default. Failures of
//!   the underlying facility surface to the caller unmodified; a degraded
//!   entropy source is never papered over with retries or fallbacks.
//!
//! - `token`
//!   Alphabets, the rejection sampler, and the public generation API:
//!   stateless [`token::generate`] / [`token::generate_with`] calls and the
//!   [`token::TokenGenerator`] handle that binds a validated
//!   `(length, alphabet)` configuration once and reuses it.
//!
//! # Design goals
//!
//! - Exact uniformity over the alphabet, never approximate
//! - Minimal and explicit APIs
//! - No state shared between generation calls
//! - Errors propagate synchronously to the caller, nothing is logged
//!
//! Token handling after generation (storage, comparison, expiry) is the
//! caller's concern; in particular, comparisons of generated tokens are
//! not constant-time.

mod os;

pub mod entropy;
pub mod token;
