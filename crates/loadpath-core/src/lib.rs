//! Loadpath Core Types and Definitions
//!
//! This crate provides the host-facing vocabulary shared by the Loadpath
//! crates. It includes:
//!
//! - **Elements**: Element identity and category tests ([`element`] module)
//! - **Geometry**: Points, bounding boxes and vertical extents ([`geometry`] module)
//! - **Host**: Traits through which a modelling environment supplies elements,
//!   intersection tests and color overrides ([`host`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod element;
pub mod geometry;
pub mod host;
