//! Secure entropy source boundary
//!
//! This module defines the crate's only external collaborator: a source of
//! cryptographically secure random bytes.
//!
//! The [`EntropySource`] trait captures the single capability the sampler
//! needs ("fill this buffer with secure random bytes, or fail"), and
//! [`OsEntropy`] implements it on top of the operating system facility in
//! `crate::os`. The trait exists so callers can substitute their own
//! source, and so tests can drive the sampler with scripted byte streams.
//!
//! A failing source is reported as-is and never retried: retrying a failed
//! secure-random read would silently mask a degraded entropy source.

mod source;

/// Trait for suppliers of cryptographically secure random bytes.
pub use source::EntropySource;

/// The operating-system-backed entropy source.
///
/// This type is the default randomness supplier for token generation.
pub use source::OsEntropy;

/// Errors reported by entropy sources.
pub use source::EntropyError;
