//! Error types for Loadpath operations.
//!
//! This module provides the main error type [`LoadpathError`] which wraps
//! the error conditions that can occur while building a dependency graph.

use std::io;

use thiserror::Error;

use loadpath_core::element::ElementId;

use crate::{config::ConfigError, export};

/// The main error type for Loadpath operations.
#[derive(Debug, Error)]
pub enum LoadpathError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Element {0} did not participate in this graph")]
    UnknownElement(ElementId),

    #[error("Element {0} appears more than once in the model")]
    DuplicateElement(ElementId),

    #[error("Support relation forms a cycle: {}", format_cycle(.cycle))]
    StructuralCycle { cycle: Vec<ElementId> },

    #[error("Model error: {0}")]
    Model(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<export::Error> for LoadpathError {
    fn from(err: export::Error) -> Self {
        match err {
            export::Error::Io(io_err) => Self::Io(io_err),
            export::Error::Render(msg) => Self::Export(msg),
        }
    }
}

fn format_cycle(cycle: &[ElementId]) -> String {
    cycle
        .iter()
        .map(ElementId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
