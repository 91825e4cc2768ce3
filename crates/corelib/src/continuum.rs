//! Host-facing continuum: a server registry plus the published ring.
//!
//! Readers load the current ring snapshot without locking. Writers take the
//! registry lock, mutate, build a complete new ring and publish it with a
//! single atomic store, so a reader sees either the old ring or the new one
//! and never a partially built one. Snapshots already handed out stay valid
//! after a rebuild.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::ContinuumConfig;
use crate::error::Result;
use crate::partitioner::{Md5Partitioner, Partitioner};
use crate::registry::ServerRegistry;
use crate::ring::{build, Ring, RingTopology};
use crate::server::Server;

/// Weighted consistent-hashing continuum.
pub struct Continuum<P: Partitioner = Md5Partitioner> {
    config: ContinuumConfig,
    partitioner: Arc<P>,
    registry: Mutex<ServerRegistry>,
    ring: ArcSwap<Ring<P>>,
}

impl Continuum<Md5Partitioner> {
    /// Empty continuum with the default configuration and MD5 hashing.
    pub fn new() -> Self {
        Self::build_unchecked(ContinuumConfig::default(), Md5Partitioner)
    }

    pub fn with_config(config: ContinuumConfig) -> Result<Self> {
        Self::with_partitioner(config, Md5Partitioner)
    }
}

impl Default for Continuum<Md5Partitioner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Partitioner> Continuum<P> {
    pub fn with_partitioner(config: ContinuumConfig, partitioner: P) -> Result<Self> {
        config.validate()?;
        Ok(Self::build_unchecked(config, partitioner))
    }

    fn build_unchecked(config: ContinuumConfig, partitioner: P) -> Self {
        let partitioner = Arc::new(partitioner);
        let ring = Ring::empty(Arc::clone(&partitioner), config.total_dots);
        Self {
            config,
            partitioner,
            registry: Mutex::new(ServerRegistry::new()),
            ring: ArcSwap::from_pointee(ring),
        }
    }

    pub fn config(&self) -> &ContinuumConfig {
        &self.config
    }

    /// Registers a server and, with auto-rebuild on, republishes the ring.
    pub fn add_server(
        &self,
        hostname: impl Into<String>,
        port: u16,
        capacity: i64,
    ) -> Result<Arc<Server>> {
        let mut registry = self.registry.lock();
        let server = registry.add(Server::new(hostname, port, capacity))?;
        info!(server = %server, capacity, "added server");
        if self.config.auto_rebuild {
            self.rebuild_locked(&registry)?;
        }
        Ok(server)
    }

    /// Registers several servers in order.
    ///
    /// Stops at the first duplicate; servers added before it stay registered.
    /// With auto-rebuild on, the ring is rebuilt once for the whole batch.
    pub fn add_servers<I, H>(&self, servers: I) -> Result<Vec<Arc<Server>>>
    where
        I: IntoIterator<Item = (H, u16, i64)>,
        H: Into<String>,
    {
        let mut registry = self.registry.lock();
        let mut added = Vec::new();
        let mut outcome = Ok(());
        for (hostname, port, capacity) in servers {
            match registry.add(Server::new(hostname, port, capacity)) {
                Ok(server) => added.push(server),
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }
        info!(count = added.len(), "added servers");
        if self.config.auto_rebuild && !added.is_empty() {
            self.rebuild_locked(&registry)?;
        }
        outcome.map(|()| added)
    }

    /// Removes the server with the same `(hostname, port)` as `server`.
    pub fn remove_server(&self, server: &Server) -> Result<Arc<Server>> {
        let mut registry = self.registry.lock();
        let removed = registry.remove(server)?;
        info!(server = %removed, "removed server");
        if self.config.auto_rebuild {
            self.rebuild_locked(&registry)?;
        }
        Ok(removed)
    }

    /// Rebuilds the ring from the current registry and publishes it.
    ///
    /// Returns the number of dots on the new ring.
    pub fn rebuild(&self) -> Result<usize> {
        let registry = self.registry.lock();
        self.rebuild_locked(&registry)
    }

    fn rebuild_locked(&self, registry: &ServerRegistry) -> Result<usize> {
        let ring = if registry.total_capacity() <= 0 {
            if registry.is_empty() {
                debug!("registry empty, publishing empty continuum");
            } else {
                warn!(
                    servers = registry.len(),
                    "no server has positive capacity, publishing empty continuum"
                );
            }
            Ring::empty(Arc::clone(&self.partitioner), self.config.total_dots)
        } else {
            build(registry.servers(), self.config.total_dots, &self.partitioner)?
        };

        let dots = ring.len();
        self.ring.store(Arc::new(ring));
        metrics::counter!("continuum_rebuilds_total").increment(1);
        metrics::gauge!("continuum_ring_dots").set(dots as f64);
        debug!(servers = registry.len(), dots, "published continuum");
        Ok(dots)
    }

    /// Returns the server owning `key` on the current ring.
    pub fn resolve(&self, key: impl AsRef<[u8]>) -> Result<Arc<Server>> {
        metrics::counter!("continuum_resolves_total").increment(1);
        self.ring.load().resolve(key.as_ref())
    }

    /// The currently published ring.
    pub fn snapshot(&self) -> Arc<Ring<P>> {
        self.ring.load_full()
    }

    /// Ownership statistics for the currently published ring.
    pub fn topology(&self) -> RingTopology {
        RingTopology::from_ring(&*self.snapshot())
    }

    /// Registered servers in insertion order.
    pub fn servers(&self) -> Vec<Arc<Server>> {
        self.registry.lock().servers().to_vec()
    }

    /// Number of registered servers (not dots).
    pub fn len(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().is_empty()
    }
}
