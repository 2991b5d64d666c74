//! Configuration types for dependency graph builds.
//!
//! This module provides the settings that control how a graph is built and
//! how its elements are classified. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`GraphConfiguration`] - Thresholds, toggles and counting method for one build.
//! - [`DependencySet`] - Selects which per-element id set drives risk classification.
//! - [`ConfigError`] - Raised when a configuration is inconsistent.
//!
//! # Example
//!
//! ```
//! # use loadpath::config::{DependencySet, GraphConfiguration};
//! let config = GraphConfiguration::new(1, 3)
//!     .unwrap()
//!     .with_counting_method(DependencySet::DirectSupported);
//! assert_eq!(config.good_dependency_threshold(), 3);
//!
//! // Thresholds must be ordered
//! assert!(GraphConfiguration::new(4, 3).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("perfect dependency threshold ({perfect}) exceeds good dependency threshold ({good})")]
    ThresholdOrder { perfect: usize, good: usize },
}

/// One of the six id sets derived for every graph element.
///
/// Used both to pick the count that drives risk classification and to query
/// a single id list from a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencySet {
    /// Direct-supported ids together with non-direct dependents.
    #[default]
    AllDependent,
    /// Elements this element supports directly.
    DirectSupported,
    /// Elements that depend on this element through intermediate supports.
    NonDirectDependent,
    /// Every element this element intersects.
    DirectConnected,
    /// Intersecting elements that are structural.
    DirectConnectedStructural,
    /// Intersecting elements except the ones supporting this element.
    NonSupportingDirect,
}

impl DependencySet {
    /// All sets, in the order they appear in views.
    pub const ALL: [DependencySet; 6] = [
        DependencySet::DirectConnected,
        DependencySet::DirectConnectedStructural,
        DependencySet::NonSupportingDirect,
        DependencySet::DirectSupported,
        DependencySet::NonDirectDependent,
        DependencySet::AllDependent,
    ];
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DependencySet::AllDependent => "all_dependent",
            DependencySet::DirectSupported => "direct_supported",
            DependencySet::NonDirectDependent => "non_direct_dependent",
            DependencySet::DirectConnected => "direct_connected",
            DependencySet::DirectConnectedStructural => "direct_connected_structural",
            DependencySet::NonSupportingDirect => "non_supporting_direct",
        };
        f.write_str(name)
    }
}

/// Settings for one graph build.
///
/// Both thresholds are inclusive upper bounds: an element whose count is at
/// most `perfect_dependency_threshold` is safe, at most
/// `good_dependency_threshold` needs caution, anything above is dangerous.
/// Construction guarantees `perfect <= good`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawGraphConfiguration")]
pub struct GraphConfiguration {
    perfect_dependency_threshold: usize,
    good_dependency_threshold: usize,
    floor_supports_any_above_column: bool,
    color_model: bool,
    clear_cache: bool,
    counting_method: DependencySet,
}

/// Unvalidated mirror of [`GraphConfiguration`] used for deserialization.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawGraphConfiguration {
    perfect_dependency_threshold: usize,
    good_dependency_threshold: usize,
    floor_supports_any_above_column: bool,
    color_model: bool,
    clear_cache: bool,
    counting_method: DependencySet,
}

impl Default for RawGraphConfiguration {
    fn default() -> Self {
        let defaults = GraphConfiguration::default();
        Self {
            perfect_dependency_threshold: defaults.perfect_dependency_threshold,
            good_dependency_threshold: defaults.good_dependency_threshold,
            floor_supports_any_above_column: defaults.floor_supports_any_above_column,
            color_model: defaults.color_model,
            clear_cache: defaults.clear_cache,
            counting_method: defaults.counting_method,
        }
    }
}

impl TryFrom<RawGraphConfiguration> for GraphConfiguration {
    type Error = ConfigError;

    fn try_from(raw: RawGraphConfiguration) -> Result<Self, Self::Error> {
        Ok(
            Self::new(raw.perfect_dependency_threshold, raw.good_dependency_threshold)?
                .with_floor_supports_any_above_column(raw.floor_supports_any_above_column)
                .with_color_model(raw.color_model)
                .with_clear_cache(raw.clear_cache)
                .with_counting_method(raw.counting_method),
        )
    }
}

impl Default for GraphConfiguration {
    fn default() -> Self {
        Self {
            perfect_dependency_threshold: 2,
            good_dependency_threshold: 5,
            floor_supports_any_above_column: false,
            color_model: false,
            clear_cache: false,
            counting_method: DependencySet::default(),
        }
    }
}

impl GraphConfiguration {
    /// Creates a configuration with the given thresholds and default toggles.
    ///
    /// # Arguments
    ///
    /// * `perfect` - Highest count still classified as safe.
    /// * `good` - Highest count still classified as caution.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThresholdOrder`] if `perfect > good`.
    pub fn new(perfect: usize, good: usize) -> Result<Self, ConfigError> {
        if perfect > good {
            return Err(ConfigError::ThresholdOrder { perfect, good });
        }
        Ok(Self {
            perfect_dependency_threshold: perfect,
            good_dependency_threshold: good,
            ..Self::default()
        })
    }

    /// Sets whether a floor may support a column or structural wall that is
    /// already supported by another element.
    pub fn with_floor_supports_any_above_column(mut self, enabled: bool) -> Self {
        self.floor_supports_any_above_column = enabled;
        self
    }

    /// Sets whether risk colors are pushed back to the host model.
    pub fn with_color_model(mut self, enabled: bool) -> Self {
        self.color_model = enabled;
        self
    }

    /// Sets whether cached element data is rebuilt from scratch.
    pub fn with_clear_cache(mut self, enabled: bool) -> Self {
        self.clear_cache = enabled;
        self
    }

    /// Sets the id set whose size drives risk classification.
    pub fn with_counting_method(mut self, method: DependencySet) -> Self {
        self.counting_method = method;
        self
    }

    pub fn perfect_dependency_threshold(&self) -> usize {
        self.perfect_dependency_threshold
    }

    pub fn good_dependency_threshold(&self) -> usize {
        self.good_dependency_threshold
    }

    pub fn floor_supports_any_above_column(&self) -> bool {
        self.floor_supports_any_above_column
    }

    pub fn color_model(&self) -> bool {
        self.color_model
    }

    pub fn clear_cache(&self) -> bool {
        self.clear_cache
    }

    pub fn counting_method(&self) -> DependencySet {
        self.counting_method
    }
}
