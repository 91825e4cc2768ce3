//! Consistent hash ring implementation.
//!
//! The ring holds sorted dots and resolves keys to the server owning the
//! next dot clockwise.

pub mod builder;
pub mod dot;
pub mod position;
#[allow(clippy::module_inception)]
pub mod ring;
pub mod topology;

pub use builder::{build, dots_for, RingBuilder, DEFAULT_TOTAL_DOTS};
pub use dot::Dot;
pub use position::{Position, RING_SIZE};
pub use ring::Ring;
pub use topology::{Ownership, RingTopology};
