//! Server registry.
//!
//! Ordered collection of server definitions. Insertion order is kept because
//! it decides which of two servers answers when their dots share a position.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::server::{total_capacity, Server};

/// Ordered, identity-unique set of servers.
#[derive(Debug, Clone, Default)]
pub struct ServerRegistry {
    servers: Vec<Arc<Server>>,
}

impl ServerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a server. Fails if its `(hostname, port)` is already present.
    pub fn add(&mut self, server: Server) -> Result<Arc<Server>> {
        if self.contains(&server) {
            return Err(Error::DuplicateServer(server.to_string()));
        }
        let server = Arc::new(server);
        self.servers.push(Arc::clone(&server));
        debug!(server = %server, capacity = server.capacity(), "registered server");
        Ok(server)
    }

    /// Remove the server with the same identity as `server`.
    pub fn remove(&mut self, server: &Server) -> Result<Arc<Server>> {
        let idx = self
            .servers
            .iter()
            .position(|s| s.as_ref() == server)
            .ok_or_else(|| Error::NotFound(server.to_string()))?;
        let removed = self.servers.remove(idx);
        debug!(server = %removed, "unregistered server");
        Ok(removed)
    }

    pub fn contains(&self, server: &Server) -> bool {
        self.servers.iter().any(|s| s.as_ref() == server)
    }

    pub fn get(&self, hostname: &str, port: u16) -> Option<&Arc<Server>> {
        self.servers
            .iter()
            .find(|s| s.hostname() == hostname && s.port() == port)
    }

    /// Sum of positive capacities. Non-positive weights own no dots.
    pub fn total_capacity(&self) -> i128 {
        total_capacity(&self.servers)
    }

    pub fn servers(&self) -> &[Arc<Server>] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_duplicate() {
        let mut registry = ServerRegistry::new();
        registry.add(Server::new("a", 1, 1)).unwrap();
        let err = registry.add(Server::new("a", 1, 5)).unwrap_err();
        assert_eq!(err, Error::DuplicateServer("a:1".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_by_identity() {
        let mut registry = ServerRegistry::new();
        registry.add(Server::new("a", 1, 4)).unwrap();
        assert_eq!(registry.get("a", 1).unwrap().capacity(), 4);
        assert!(registry.get("a", 2).is_none());
    }

    #[test]
    fn test_remove_missing() {
        let mut registry = ServerRegistry::new();
        registry.add(Server::new("a", 1, 1)).unwrap();
        let err = registry.remove(&Server::new("b", 1, 1)).unwrap_err();
        assert_eq!(err, Error::NotFound("b:1".into()));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut registry = ServerRegistry::new();
        for port in 1..=3 {
            registry.add(Server::new("h", port, 1)).unwrap();
        }
        registry.remove(&Server::new("h", 2, 0)).unwrap();
        let ports: Vec<u16> = registry.servers().iter().map(|s| s.port()).collect();
        assert_eq!(ports, vec![1, 3]);
    }

    #[test]
    fn test_total_capacity_ignores_non_positive() {
        let mut registry = ServerRegistry::new();
        registry.add(Server::new("a", 1, 3)).unwrap();
        registry.add(Server::new("b", 1, 0)).unwrap();
        registry.add(Server::new("c", 1, -4)).unwrap();
        assert_eq!(registry.total_capacity(), 3);
    }
}
