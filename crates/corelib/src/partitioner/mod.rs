//! Partitioner abstraction for the continuum.
//!
//! Partitioners turn byte strings into positions on the ring. The MD5
//! partitioner is the default; others are opt-in.

pub mod blake3;
pub mod md5;
pub mod traits;

pub use self::blake3::Blake3Partitioner;
pub use self::md5::Md5Partitioner;
pub use traits::{Partitioner, POSITIONS_PER_DIGEST};
