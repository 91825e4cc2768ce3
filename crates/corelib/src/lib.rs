//! Weighted consistent hashing on a 32-bit continuum.
//!
//! This crate maps keys to backend servers so that:
//! - the same key maps to the same server while the server set is unchanged
//! - adding or removing a server only moves the keys in its arcs
//! - each server receives a share of keys proportional to its capacity
//!
//! Building blocks:
//! - Partitioners (hash functions producing ring positions)
//! - Server definitions and the server registry
//! - Ring construction, resolution and ownership statistics
//! - The [`Continuum`] facade tying them together

pub mod config;
pub mod continuum;
pub mod error;
pub mod partitioner;
pub mod registry;
pub mod ring;
pub mod server;

pub use config::ContinuumConfig;
pub use continuum::Continuum;
pub use error::{Error, Result};
pub use partitioner::{Blake3Partitioner, Md5Partitioner, Partitioner};
pub use registry::ServerRegistry;
pub use ring::{Dot, Position, Ring, RingBuilder, RingTopology, DEFAULT_TOTAL_DOTS};
pub use server::{Server, ServerId, DEFAULT_CAPACITY};
