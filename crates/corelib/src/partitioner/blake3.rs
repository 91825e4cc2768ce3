//! BLAKE3 partitioner implementation.
//!
//! Uses the first 16 bytes of the BLAKE3 digest. Rings built with this
//! partitioner place dots differently from the MD5 default and must not be
//! mixed with them.

use crate::partitioner::traits::{decode_le_words, Partitioner, POSITIONS_PER_DIGEST};
use crate::ring::Position;

/// BLAKE3 partitioner, truncated to 128 bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Partitioner;

impl Partitioner for Blake3Partitioner {
    fn positions(&self, key: &[u8]) -> [Position; POSITIONS_PER_DIGEST] {
        let digest = blake3::hash(key);
        decode_le_words(&digest.as_bytes()[..16])
    }

    fn name(&self) -> &'static str {
        "Blake3Partitioner"
    }
}
