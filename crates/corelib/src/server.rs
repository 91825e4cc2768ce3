//! Server definitions placed on the continuum.
//!
//! A server is identified by its `(hostname, port)` pair. Capacity is a
//! relative weight and takes no part in equality, ordering or hashing, so a
//! `Server` built with any capacity can be used to look up or remove the
//! registered one.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Capacity given to servers added without an explicit weight.
pub const DEFAULT_CAPACITY: i64 = 1;

/// Sum of the positive capacities of `servers`.
///
/// Widened to `i128` so the total of any number of `i64` weights is exact.
pub fn total_capacity(servers: &[Arc<Server>]) -> i128 {
    servers
        .iter()
        .map(|s| i128::from(s.capacity().max(0)))
        .sum()
}

/// Identity of a server on the continuum.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ServerId {
    pub hostname: String,
    pub port: u16,
}

impl ServerId {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
        }
    }

    /// Label hashed for batch `index` of this server's dots.
    ///
    /// The `<hostname>-<port>-<index>` format is part of the ring's external
    /// contract: changing it moves every dot.
    pub fn dot_label(&self, index: usize) -> String {
        format!("{}-{}-{}", self.hostname, self.port, index)
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}

/// A backend server with a relative capacity.
///
/// Capacities of zero or below are accepted but such a server owns no dots
/// and is therefore never resolved.
#[derive(Clone, Debug)]
pub struct Server {
    id: ServerId,
    capacity: i64,
}

impl Server {
    pub fn new(hostname: impl Into<String>, port: u16, capacity: i64) -> Self {
        Self {
            id: ServerId::new(hostname, port),
            capacity,
        }
    }

    #[inline]
    pub fn id(&self) -> &ServerId {
        &self.id
    }

    #[inline]
    pub fn hostname(&self) -> &str {
        &self.id.hostname
    }

    #[inline]
    pub fn port(&self) -> u16 {
        self.id.port
    }

    #[inline]
    pub fn capacity(&self) -> i64 {
        self.capacity
    }
}

impl PartialEq for Server {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Server {}

impl PartialOrd for Server {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Server {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Server {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
