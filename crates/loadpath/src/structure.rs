//! Graph structure: nodes, connections, the element cache and the
//! processing order.
//!
//! # Architecture
//!
//! - [`GraphNode`]: One element, its copied attributes and its connections
//! - [`Connection`] / [`ConnectionType`]: One side of a discovered intersection
//! - [`ElementCache`]: Nodes keyed by element id, reused across builds
//! - [`Priority`]: Processing buckets that decide which pairs are classified first

mod cache;
mod node;
mod order;

pub use cache::ElementCache;
pub use node::{Connection, ConnectionType, GraphNode};
pub use order::{Priority, order_by_priority};

pub(crate) use order::processing_order;
