//! Entropy source trait and the OS-backed implementation.
//!
//! The contract is deliberately small: one fallible fill operation. The
//! sampler in `crate::token` consumes sources exclusively through this
//! trait, so anything that can fill a byte slice (the OS facility, a
//! hardware device wrapper, a scripted test stream) can drive token
//! generation.

use thiserror::Error;

use crate::os::sys_random;

/// Errors reported by an [`EntropySource`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// The underlying facility could not supply cryptographically secure
    /// bytes. Carries the raw OS status code (errno on Unix, NTSTATUS on
    /// Windows).
    #[error("entropy source unavailable (os status {status})")]
    Unavailable { status: i32 },

    /// A bounded source ran out of bytes before the request was satisfied.
    ///
    /// The OS source never reports this; it applies to finite sources such
    /// as scripted streams used in tests.
    #[error("entropy source exhausted")]
    Exhausted,
}

/// A supplier of cryptographically secure random bytes.
///
/// Implementations must either fill the entire buffer with bytes that are
/// uniformly distributed and unpredictable, or fail. Partially filled
/// buffers must never be reported as success.
pub trait EntropySource {
    /// Fills `buf` completely with cryptographically secure random bytes.
    ///
    /// # Errors
    /// Returns an [`EntropyError`] if the source cannot satisfy the
    /// request. The buffer contents are unspecified on failure.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns `len` cryptographically secure random bytes.
    ///
    /// # Errors
    /// Propagates the failure of the underlying [`fill`](Self::fill).
    fn bytes(&mut self, len: usize) -> Result<Vec<u8>, EntropyError> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;

        Ok(buf)
    }
}

/// The operating system's secure randomness facility.
///
/// Delegates to the platform layer: `getrandom` on Linux,
/// `arc4random_buf` on macOS, `BCryptGenRandom` on Windows. The facility
/// blocks until it can supply the requested bytes or fails outright;
/// failures propagate to the caller without retry.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Creates a handle to the OS entropy facility.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        sys_random(buf).map_err(|status| EntropyError::Unavailable { status })
    }
}
