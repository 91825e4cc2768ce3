//! Positions on the continuum.

use std::fmt;

/// Number of distinct positions on the ring (2^32).
pub const RING_SIZE: u64 = 1 << 32;

/// A point on the circular 32-bit continuum.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Position(pub u32);

impl Position {
    /// Minimum position (start of ring).
    pub const fn zero() -> Self {
        Position(0)
    }

    /// Maximum position (end of ring).
    pub const fn max() -> Self {
        Position(u32::MAX)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_max(&self) -> bool {
        self.0 == u32::MAX
    }

    /// Clockwise distance from `self` to `other`.
    ///
    /// Equal positions are a full turn apart, so the result lies in
    /// `1..=RING_SIZE`.
    pub fn distance_to(&self, other: &Self) -> u64 {
        if other.0 > self.0 {
            u64::from(other.0 - self.0)
        } else {
            RING_SIZE - u64::from(self.0 - other.0)
        }
    }
}

impl From<u32> for Position {
    fn from(value: u32) -> Self {
        Position(value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
