//! Immutable continuum snapshot and key resolution.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::partitioner::{Md5Partitioner, Partitioner};
use crate::ring::dot::Dot;
use crate::ring::position::Position;
use crate::server::Server;

/// An immutable ring of dots sorted by position.
///
/// A `Ring` is never mutated after construction; a rebuild produces a new
/// one. Resolution is therefore a pure read and may run from any number of
/// threads against the same snapshot.
pub struct Ring<P: Partitioner = Md5Partitioner> {
    dots: Box<[Dot]>,
    partitioner: Arc<P>,
    total_dots: usize,
}

impl<P: Partitioner> Ring<P> {
    /// Wraps dots that are already sorted by position.
    pub(crate) fn from_sorted(dots: Vec<Dot>, partitioner: Arc<P>, total_dots: usize) -> Self {
        debug_assert!(dots.windows(2).all(|w| w[0].position <= w[1].position));
        Self {
            dots: dots.into_boxed_slice(),
            partitioner,
            total_dots,
        }
    }

    /// A ring without dots. Every resolution against it fails.
    pub fn empty(partitioner: Arc<P>, total_dots: usize) -> Self {
        Self::from_sorted(Vec::new(), partitioner, total_dots)
    }

    /// Returns the server owning `key`.
    ///
    /// The key is hashed with the ring's partitioner and the first of the
    /// four resulting words is used as its position.
    pub fn resolve(&self, key: &[u8]) -> Result<Arc<Server>> {
        if self.dots.is_empty() {
            return Err(Error::EmptyRing);
        }
        self.resolve_position(self.partitioner.key_position(key))
    }

    /// Returns the server of the first dot strictly after `position`,
    /// wrapping to the lowest dot past the end of the ring.
    pub fn resolve_position(&self, position: Position) -> Result<Arc<Server>> {
        let dot = self.successor(position).ok_or(Error::EmptyRing)?;
        Ok(Arc::clone(&dot.server))
    }

    /// The dot answering for `position`, or `None` on an empty ring.
    pub fn successor(&self, position: Position) -> Option<&Dot> {
        let first = self.dots.first()?;
        let idx = self.dots.partition_point(|dot| dot.position <= position);
        Some(self.dots.get(idx).unwrap_or(first))
    }

    /// All dots in ascending position order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Number of dots on the ring.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Target dot count this ring was built for.
    pub fn total_dots(&self) -> usize {
        self.total_dots
    }

    pub fn partitioner(&self) -> &Arc<P> {
        &self.partitioner
    }

    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }
}

impl<P: Partitioner> fmt::Debug for Ring<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("dots", &self.dots.len())
            .field("total_dots", &self.total_dots)
            .field("partitioner", &self.partitioner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_at(positions: &[(u32, u16)]) -> Ring {
        let dots = positions
            .iter()
            .map(|&(pos, port)| Dot::new(Position(pos), Arc::new(Server::new("h", port, 1))))
            .collect();
        Ring::from_sorted(dots, Arc::new(Md5Partitioner), positions.len())
    }

    #[test]
    fn test_empty_ring_fails() {
        let ring: Ring = Ring::empty(Arc::new(Md5Partitioner), 1000);
        assert_eq!(ring.resolve(b"key").unwrap_err(), Error::EmptyRing);
        assert_eq!(
            ring.resolve_position(Position(0)).unwrap_err(),
            Error::EmptyRing
        );
    }

    #[test]
    fn test_successor_is_strictly_greater() {
        let ring = ring_at(&[(100, 1), (200, 2), (300, 3)]);
        assert_eq!(ring.resolve_position(Position(0)).unwrap().port(), 1);
        assert_eq!(ring.resolve_position(Position(99)).unwrap().port(), 1);
        // A key sitting exactly on a dot goes to the next one.
        assert_eq!(ring.resolve_position(Position(100)).unwrap().port(), 2);
        assert_eq!(ring.resolve_position(Position(250)).unwrap().port(), 3);
    }

    #[test]
    fn test_wraparound() {
        let ring = ring_at(&[(100, 1), (200, 2), (300, 3)]);
        assert_eq!(ring.resolve_position(Position(300)).unwrap().port(), 1);
        assert_eq!(ring.resolve_position(Position::max()).unwrap().port(), 1);
    }

    #[test]
    fn test_single_dot_owns_everything() {
        let ring = ring_at(&[(12345, 9)]);
        for pos in [0, 12344, 12345, u32::MAX] {
            assert_eq!(ring.resolve_position(Position(pos)).unwrap().port(), 9);
        }
    }

    #[test]
    fn test_reports_build_parameters() {
        let ring: Ring = Ring::empty(Arc::new(Md5Partitioner), 4000);
        assert_eq!(ring.total_dots(), 4000);
        assert_eq!(ring.partitioner().key_position(b"abc"), Position(0x9850_0190));
        assert_eq!(ring.partitioner_name(), "Md5Partitioner");
    }

    #[test]
    fn test_resolve_uses_first_word() {
        let ring = ring_at(&[(0x4000_0000, 1), (0xc000_0000, 2)]);
        // md5("abc") first word = 0x98500190
        assert_eq!(ring.resolve(b"abc").unwrap().port(), 2);
    }
}
