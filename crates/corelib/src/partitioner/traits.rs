//! Core partitioner trait definitions.

use crate::ring::Position;

/// Number of ring positions produced by one digest.
pub const POSITIONS_PER_DIGEST: usize = 4;

/// A partitioner hashes byte strings onto the continuum.
///
/// Every call yields four positions taken from a single 128-bit digest. Ring
/// construction uses all four, key resolution only the first. Partitioners
/// are stateless and thread-safe; two rings only agree on a mapping when they
/// use the same partitioner.
pub trait Partitioner: Send + Sync + 'static {
    /// Hashes `key` into four ring positions.
    fn positions(&self, key: &[u8]) -> [Position; POSITIONS_PER_DIGEST];

    /// Position of a key being resolved.
    #[inline]
    fn key_position(&self, key: &[u8]) -> Position {
        self.positions(key)[0]
    }

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}

/// Splits the first 16 bytes of a digest into four little-endian words.
pub(crate) fn decode_le_words(digest: &[u8]) -> [Position; POSITIONS_PER_DIGEST] {
    debug_assert!(digest.len() >= 16);
    let mut out = [Position::zero(); POSITIONS_PER_DIGEST];
    for (slot, word) in out.iter_mut().zip(digest.chunks_exact(4)) {
        *slot = Position(u32::from_le_bytes([word[0], word[1], word[2], word[3]]));
    }
    out
}
