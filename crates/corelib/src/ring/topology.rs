//! Ownership statistics over a ring snapshot.
//!
//! A dot owns the arc that ends at it: every position from the previous dot
//! (inclusive) up to its own position (exclusive) resolves to it. Summing arcs
//! per server gives the share of the keyspace that server answers for.

use std::collections::HashMap;
use std::sync::Arc;

use crate::partitioner::Partitioner;
use crate::ring::position::RING_SIZE;
use crate::ring::ring::Ring;
use crate::server::{Server, ServerId};

/// Per-server ownership on a ring.
#[derive(Debug, Clone)]
pub struct Ownership {
    pub server: Arc<Server>,
    /// Number of dots the server holds.
    pub dots: usize,
    /// Number of ring positions resolving to the server.
    pub span: u64,
}

impl Ownership {
    /// Fraction of the keyspace owned, in `0.0..=1.0`.
    pub fn share(&self) -> f64 {
        self.span as f64 / RING_SIZE as f64
    }
}

/// Ownership view computed from one ring snapshot.
#[derive(Debug, Clone, Default)]
pub struct RingTopology {
    owners: Vec<Ownership>,
}

impl RingTopology {
    pub fn from_ring<P: Partitioner>(ring: &Ring<P>) -> Self {
        let dots = ring.dots();
        let mut index: HashMap<ServerId, usize> = HashMap::new();
        let mut owners: Vec<Ownership> = Vec::new();

        for (i, dot) in dots.iter().enumerate() {
            let previous = if i == 0 { &dots[dots.len() - 1] } else { &dots[i - 1] };
            // Dots sharing a position: the first one answers for the arc.
            let span = if previous.position != dot.position {
                previous.distance_to(dot)
            } else if i == 0 {
                RING_SIZE
            } else {
                0
            };

            let slot = *index.entry(dot.server.id().clone()).or_insert_with(|| {
                owners.push(Ownership {
                    server: Arc::clone(&dot.server),
                    dots: 0,
                    span: 0,
                });
                owners.len() - 1
            });
            owners[slot].dots += 1;
            owners[slot].span += span;
        }

        owners.sort_by(|a, b| a.server.cmp(&b.server));
        Self { owners }
    }

    /// Ownership entries ordered by server identity.
    pub fn owners(&self) -> &[Ownership] {
        &self.owners
    }

    pub fn get(&self, id: &ServerId) -> Option<&Ownership> {
        self.owners.iter().find(|o| o.server.id() == id)
    }
}
