// src/dag/mod.rs

//! Activity network representation.
//!
//! - [`registry`] turns raw rows into an index-addressed arena of activities
//!   with predecessor/successor edges.
//! - [`topo`] orders that graph topologically in either direction and is the
//!   cycle guard for both scheduling passes.

pub mod registry;
pub mod topo;

pub use registry::{Activity, ActivityRegistry, ActivityRow, MAX_EXACT_TIME};
pub use topo::layered_order;
