//! Dots on the continuum.
//!
//! # Dots
//!
//! Each server is represented on the ring by many dots rather than a single
//! point. The number of dots a server gets is proportional to its capacity,
//! which is how capacity turns into a share of the keyspace:
//!
//! 1. **Weighted Distribution**: a server with 3x the capacity owns ~3x the dots
//! 2. **Gradual Rebalancing**: removing a server only frees the arcs ending at its dots
//! 3. **Even Spread**: many small arcs per server smooth out hash variance
//!
//! # Performance Characteristics
//!
//! - **Memory**: one `Position` plus one `Arc` pointer per dot
//! - **Lookup**: O(log n) where n = total dots

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::ring::position::Position;
use crate::server::Server;

/// A single (position, server) entry on the ring.
///
/// Dots compare by position only. Two dots at the same position are equal
/// for ordering purposes even when they belong to different servers; the
/// builder's stable sort then keeps them in registry order.
#[derive(Debug, Clone)]
pub struct Dot {
    /// Position on the ring.
    pub position: Position,

    /// The server that owns this dot.
    ///
    /// Many dots share the same server; resolution returns this pointer.
    pub server: Arc<Server>,
}

impl Dot {
    #[inline]
    pub fn new(position: Position, server: Arc<Server>) -> Self {
        Self { position, server }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn server(&self) -> &Arc<Server> {
        &self.server
    }

    /// Clockwise distance to another dot.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> u64 {
        self.position.distance_to(&other.position)
    }
}

impl PartialEq for Dot {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Dot {}

impl PartialOrd for Dot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dot(position={}, server={})", self.position, self.server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(port: u16) -> Arc<Server> {
        Arc::new(Server::new("host", port, 1))
    }

    #[test]
    fn test_dot_ordering() {
        let a = Dot::new(Position(100), server(1));
        let b = Dot::new(Position(200), server(2));
        assert!(a < b);
    }

    #[test]
    fn test_equal_position_ignores_server() {
        let a = Dot::new(Position(5), server(1));
        let b = Dot::new(Position(5), server(2));
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_dot_distance() {
        let a = Dot::new(Position(100), server(1));
        let b = Dot::new(Position(300), server(2));
        assert_eq!(a.distance_to(&b), 200);
    }
}
