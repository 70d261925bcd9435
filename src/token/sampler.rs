//! Debiased rejection sampler.
//!
//! This is the core of the crate: a conversion from a stream of uniformly
//! random bytes into a stream of uniformly random symbols over an
//! alphabet of 2 to 256 positions.
//!
//! For an alphabet of `size` positions, `256 % size` residues are
//! over-represented when all 256 byte values are reduced with
//! `byte % size`. Discarding the byte values below `256 % size` leaves
//! exactly `size * (256 / size)` accepted values, a whole number of
//! residue cycles, so the reduction of the remaining bytes is exactly
//! uniform. When `size` divides 256 evenly the threshold is zero and no
//! byte is ever discarded.
//!
//! Bytes are pulled from the entropy source in 64-byte chunks and
//! consumed sequentially; a chunk is only replaced once fully consumed,
//! and the first chunk is only fetched once a byte is actually needed.

use crate::entropy::{EntropyError, EntropySource};
use crate::token::TokenError;
use crate::token::alphabet::Alphabet;

/// Bytes fetched from the entropy source per refill.
///
/// Any positive size would be correct; larger chunks trade fewer
/// entropy-source round-trips against more unread bytes discarded at the
/// end of a call.
const CHUNK_SIZE: usize = 64;

/// A refillable buffer of random bytes owned by a single generation call.
///
/// Holds one chunk of entropy and a cursor over its unconsumed part. The
/// buffer starts empty and fetches lazily, so a call that needs no bytes
/// performs no entropy I/O.
struct ChunkBuffer<'a, S: EntropySource> {
    source: &'a mut S,
    chunk: [u8; CHUNK_SIZE],
    cursor: usize,
}

impl<'a, S: EntropySource> ChunkBuffer<'a, S> {
    fn new(source: &'a mut S) -> Self {
        Self {
            source,
            chunk: [0u8; CHUNK_SIZE],
            cursor: CHUNK_SIZE,
        }
    }

    /// Returns the next unconsumed random byte, refilling the chunk from
    /// the source when exhausted.
    fn next_byte(&mut self) -> Result<u8, EntropyError> {
        if self.cursor == CHUNK_SIZE {
            self.source.fill(&mut self.chunk)?;
            self.cursor = 0;
        }

        let byte = self.chunk[self.cursor];
        self.cursor += 1;

        Ok(byte)
    }
}

/// Draws `length` symbols uniformly from `alphabet`, using `source` for
/// randomness.
///
/// Each output symbol is selected independently; discarded bytes do not
/// count toward the length. The call owns its byte buffer, holds no state
/// afterwards, and performs no I/O beyond reading the source.
///
/// # Errors
/// Returns [`TokenError::EntropyUnavailable`] if the source fails; the
/// failure is surfaced immediately, without retry.
pub fn sample<S: EntropySource>(
    source: &mut S,
    alphabet: &Alphabet,
    length: usize,
) -> Result<String, TokenError> {
    let size = alphabet.size();

    // Byte values below this threshold would skew the reduction toward
    // the first `256 % size` alphabet positions.
    let bias_limit = (256 % size) as u8;

    let mut bytes = ChunkBuffer::new(source);
    let mut token = String::with_capacity(length);
    let mut produced = 0;

    while produced < length {
        let byte = bytes.next_byte()?;

        if byte < bias_limit {
            continue;
        }

        token.push(alphabet.symbol(byte as usize % size));
        produced += 1;
    }

    Ok(token)
}
