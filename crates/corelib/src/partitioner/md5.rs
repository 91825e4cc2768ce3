//! MD5 partitioner implementation.
//!
//! This is the default partitioner and the compatibility contract of the
//! continuum: positions are the four little-endian words of
//! `md5(key)`. Any other implementation that wants to agree on key placement
//! must hash identically.

use md5::{Digest, Md5};

use crate::partitioner::traits::{decode_le_words, Partitioner, POSITIONS_PER_DIGEST};
use crate::ring::Position;

/// MD5 partitioner (default).
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Partitioner;

impl Partitioner for Md5Partitioner {
    fn positions(&self, key: &[u8]) -> [Position; POSITIONS_PER_DIGEST] {
        let digest = Md5::digest(key);
        decode_le_words(digest.as_slice())
    }

    fn name(&self) -> &'static str {
        "Md5Partitioner"
    }
}
