//! Ring construction.
//!
//! # Algorithm
//!
//! 1. Sum the positive capacities of all servers.
//! 2. Give each server `floor(total_dots * capacity / total_capacity)` dots.
//! 3. Hash `"<hostname>-<port>-<batch>"` for batch 0, 1, ... and take all four
//!    positions of each digest; the last, partial batch takes only the first
//!    `dots % 4` positions and drops the rest.
//! 4. Stable-sort every dot by position.
//!
//! The dot layout depends only on the server list, the target dot count and
//! the partitioner, so independent builds produce identical rings.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::partitioner::{Md5Partitioner, Partitioner, POSITIONS_PER_DIGEST};
use crate::ring::dot::Dot;
use crate::ring::ring::Ring;
use crate::server::{total_capacity, Server};

/// Default number of dots spread over the whole ring.
pub const DEFAULT_TOTAL_DOTS: usize = 1000;

/// Number of dots owed to a server of `capacity` out of `total_capacity`.
///
/// Integer floor division; non-positive capacities get nothing.
pub fn dots_for(capacity: i64, total_capacity: i128, total_dots: usize) -> usize {
    if capacity <= 0 || total_capacity <= 0 {
        return 0;
    }
    let owed = (total_dots as u128 * capacity as u128) / total_capacity as u128;
    owed as usize
}

/// Builds a ring from `servers`, spreading roughly `total_dots` dots.
///
/// Fails with [`Error::Configuration`] when there are no servers, when no
/// server has a positive capacity, or when `total_dots` is zero.
pub fn build<P: Partitioner>(
    servers: &[Arc<Server>],
    total_dots: usize,
    partitioner: &Arc<P>,
) -> Result<Ring<P>> {
    if total_dots == 0 {
        return Err(Error::Configuration("total dots must be positive".into()));
    }
    if servers.is_empty() {
        return Err(Error::Configuration("no servers to place".into()));
    }
    let total_capacity = total_capacity(servers);
    if total_capacity <= 0 {
        return Err(Error::Configuration(
            "total server capacity must be positive".into(),
        ));
    }

    let mut dots = Vec::with_capacity(total_dots);
    for server in servers {
        let owed = dots_for(server.capacity(), total_capacity, total_dots);
        place_server(&mut dots, server, owed, &**partitioner);
        trace!(server = %server, dots = owed, "placed server");
    }

    dots.sort_by_key(|dot| dot.position);

    debug!(
        servers = servers.len(),
        dots = dots.len(),
        total_dots,
        partitioner = partitioner.name(),
        "built continuum"
    );
    Ok(Ring::from_sorted(dots, Arc::clone(partitioner), total_dots))
}

/// Appends `count` dots for `server`, four per digest.
fn place_server<P: Partitioner>(
    dots: &mut Vec<Dot>,
    server: &Arc<Server>,
    count: usize,
    partitioner: &P,
) {
    let full_batches = count / POSITIONS_PER_DIGEST;
    let remainder = count % POSITIONS_PER_DIGEST;

    for batch in 0..full_batches {
        let positions = partitioner.positions(server.id().dot_label(batch).as_bytes());
        dots.extend(
            positions
                .iter()
                .map(|&position| Dot::new(position, Arc::clone(server))),
        );
    }

    if remainder > 0 {
        let positions = partitioner.positions(server.id().dot_label(full_batches).as_bytes());
        dots.extend(
            positions[..remainder]
                .iter()
                .map(|&position| Dot::new(position, Arc::clone(server))),
        );
    }
}

/// Builder for constructing a [`Ring`] directly from servers.
///
/// The builder does not check server identities; use
/// [`crate::Continuum`] when duplicates must be rejected.
pub struct RingBuilder<P: Partitioner = Md5Partitioner> {
    servers: Vec<Arc<Server>>,
    total_dots: usize,
    partitioner: Arc<P>,
}

impl RingBuilder<Md5Partitioner> {
    /// Creates a builder with the MD5 partitioner and the default dot count.
    pub fn new() -> Self {
        Self::with_partitioner(Md5Partitioner)
    }
}

impl Default for RingBuilder<Md5Partitioner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Partitioner> RingBuilder<P> {
    pub fn with_partitioner(partitioner: P) -> Self {
        Self {
            servers: Vec::new(),
            total_dots: DEFAULT_TOTAL_DOTS,
            partitioner: Arc::new(partitioner),
        }
    }

    /// Sets the target number of dots for the whole ring.
    pub fn with_total_dots(mut self, total_dots: usize) -> Self {
        self.total_dots = total_dots;
        self
    }

    pub fn add_server(mut self, server: Server) -> Self {
        self.servers.push(Arc::new(server));
        self
    }

    pub fn add_servers<I>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = Arc<Server>>,
    {
        self.servers.extend(servers);
        self
    }

    pub fn build(&self) -> Result<Ring<P>> {
        build(&self.servers, self.total_dots, &self.partitioner)
    }
}
