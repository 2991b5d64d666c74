//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Graph errors carry
//! no source spans, so each error becomes one report with a code and help text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};
use thiserror::Error;

use loadpath::LoadpathError;

use crate::config::ConfigError;

/// Errors reported by the CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] LoadpathError),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Graph(LoadpathError::Io(err))
    }
}

/// Adapter that renders a [`CliError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl ErrorAdapter<'_> {
    fn code_str(&self) -> &'static str {
        match self.0 {
            CliError::Config(_) => "loadpath::config",
            CliError::Graph(err) => match err {
                LoadpathError::Io(_) => "loadpath::io",
                LoadpathError::InvalidConfiguration(_) => "loadpath::config",
                LoadpathError::UnknownElement(_) => "loadpath::unknown_element",
                LoadpathError::DuplicateElement(_) => "loadpath::duplicate_element",
                LoadpathError::StructuralCycle { .. } => "loadpath::cycle",
                LoadpathError::Model(_) => "loadpath::model",
                LoadpathError::Export(_) => "loadpath::export",
            },
        }
    }

    fn help_str(&self) -> Option<&'static str> {
        let help = match self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => "check the path passed to --config",
            CliError::Config(ConfigError::Parse { .. }) => {
                "the [graph] table needs perfect_dependency_threshold <= good_dependency_threshold"
            }
            CliError::Config(ConfigError::Read { .. }) => return None,
            CliError::Graph(err) => match err {
                LoadpathError::Io(_) => "check that the input exists and the output directory is writable",
                LoadpathError::InvalidConfiguration(_) => {
                    "perfect_dependency_threshold must not exceed good_dependency_threshold"
                }
                LoadpathError::DuplicateElement(_) => "every element in the model needs a unique id",
                LoadpathError::StructuralCycle { .. } => {
                    "the listed elements rest on each other in a loop; check their vertical extents"
                }
                LoadpathError::Model(_) => {
                    "a model is {\"elements\": [...]} with id, category, optional parameters and min/max solids"
                }
                LoadpathError::UnknownElement(_) | LoadpathError::Export(_) => return None,
            },
        };
        Some(help)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_str()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
