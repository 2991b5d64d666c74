//! Risk classification of graph elements.
//!
//! An element's risk grows with the number of elements that depend on it.
//! Which dependent set is counted is configurable, and the same counting
//! applies to live graph nodes and to projected views.

use serde::Serialize;

use loadpath_core::color::Color;

use crate::config::{DependencySet, GraphConfiguration};

/// Anything that can report the size of its derived id sets.
pub trait DependencyCounts {
    /// Returns the number of ids in the given set.
    fn count(&self, set: DependencySet) -> usize;
}

/// Risk bucket of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

impl RiskLevel {
    /// Fill color used for this level in exported graphs.
    pub fn display_color(self) -> Color {
        match self {
            RiskLevel::Safe => Color::from_rgb8(0x00, 0x80, 0x00),
            RiskLevel::Caution => Color::from_rgb8(0xFF, 0xFF, 0x00),
            RiskLevel::Danger => Color::from_rgb8(0xFF, 0x00, 0x00),
        }
    }

    /// Color the host paints over the element in the model.
    pub fn model_color(self) -> Color {
        match self {
            RiskLevel::Safe => Color::from_rgb8(0x00, 0xFF, 0x00),
            RiskLevel::Caution => Color::from_rgb8(0xFF, 0xFF, 0x00),
            RiskLevel::Danger => Color::from_rgb8(0xFF, 0x00, 0x00),
        }
    }
}

/// Buckets dependency counts into [`RiskLevel`]s.
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier {
    perfect: usize,
    good: usize,
    method: DependencySet,
}

impl RiskClassifier {
    pub fn from_config(config: &GraphConfiguration) -> Self {
        Self {
            perfect: config.perfect_dependency_threshold(),
            good: config.good_dependency_threshold(),
            method: config.counting_method(),
        }
    }

    /// The set whose size is compared against the thresholds.
    pub fn counting_method(&self) -> DependencySet {
        self.method
    }

    /// Returns the count the classification is based on.
    pub fn count(&self, subject: &(impl DependencyCounts + ?Sized)) -> usize {
        subject.count(self.method)
    }

    /// Classifies a subject by the size of its configured dependent set.
    pub fn classify(&self, subject: &(impl DependencyCounts + ?Sized)) -> RiskLevel {
        self.level_for(self.count(subject))
    }

    /// Maps a raw count to its bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loadpath::{GraphConfiguration, RiskClassifier, RiskLevel};
    /// let config = GraphConfiguration::new(1, 3).unwrap();
    /// let classifier = RiskClassifier::from_config(&config);
    ///
    /// assert_eq!(classifier.level_for(1), RiskLevel::Safe);
    /// assert_eq!(classifier.level_for(3), RiskLevel::Caution);
    /// assert_eq!(classifier.level_for(4), RiskLevel::Danger);
    /// ```
    pub fn level_for(&self, count: usize) -> RiskLevel {
        if count <= self.perfect {
            RiskLevel::Safe
        } else if count <= self.good {
            RiskLevel::Caution
        } else {
            RiskLevel::Danger
        }
    }
}
