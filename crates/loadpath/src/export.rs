//! Export of built graphs.
//!
//! This module provides the [`Exporter`] trait for turning a built graph into
//! an output format. Exporters read the element cache after a build, since
//! only the cache still holds per-connection types.
//!
//! # Available Backends
//!
//! - [`dot`]: Graphviz DOT output via [`dot::DotExporter`]
//!
//! [`Error`] converts into [`LoadpathError::Export`] at the crate boundary.
//!
//! [`LoadpathError::Export`]: crate::LoadpathError::Export

pub mod dot;

use std::fmt;

use crate::{risk::RiskClassifier, structure::ElementCache};

/// Abstraction for graph export backends.
pub trait Exporter {
    /// Exports the graph held by `cache`, coloring elements with `risk`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the graph cannot be converted to the
    /// target format.
    fn export_graph<S>(&mut self, cache: &ElementCache<S>, risk: &RiskClassifier) -> Result<(), Error>;
}

/// Errors that can occur during graph export.
#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
