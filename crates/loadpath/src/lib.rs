//! Loadpath - Support and dependency graphs for building models.
//!
//! Loadpath infers which physical elements of a building model rest on which
//! others from their geometry alone. Intersecting elements are classified by
//! their vertical extents, dependents are propagated up every support chain,
//! and each element is bucketed by how much depends on it.

pub mod config;
pub mod export;
pub mod structure;

mod classify;
mod engine;
mod error;
mod risk;
mod view;

pub use loadpath_core::{color, element, geometry, host};

pub use classify::ConnectionClassifier;
pub use config::{DependencySet, GraphConfiguration};
pub use error::LoadpathError;
pub use risk::{DependencyCounts, RiskClassifier, RiskLevel};
pub use structure::{Connection, ConnectionType, ElementCache, GraphNode};
pub use view::{GraphElementView, GraphView};

use std::collections::HashSet;

use log::{debug, info, warn};

use loadpath_core::host::{ColorSink, Element, GeometryKernel};

use engine::GraphConstructionEngine;
use export::Exporter;

/// Builder for dependency graphs over building model snapshots.
///
/// The builder holds the configuration only. Callers own the
/// [`ElementCache`] and pass it to every build, so repeated builds over the
/// same model reuse the element geometry read the first time.
///
/// # Examples
///
/// ```rust
/// use loadpath::{DependencySet, ElementCache, GraphBuilder};
/// use loadpath::element::{ElementId, ModelElement};
/// use loadpath::geometry::{BoundingBox, Point3};
/// use loadpath::host::BoxKernel;
///
/// let solid = |z0, z1| BoundingBox::from_corners(Point3::new(0.0, 0.0, z0), Point3::new(1.0, 1.0, z1));
/// let elements = vec![
///     ModelElement::new(1, "Structural Columns", vec![solid(0.0, 3.0)]),
///     ModelElement::new(2, "Structural Framing", vec![solid(3.0, 3.5)]),
/// ];
///
/// let mut cache = ElementCache::new();
/// let graph = GraphBuilder::default()
///     .build(&mut cache, &elements, &BoxKernel)
///     .expect("Failed to build graph");
///
/// let supported = graph.ids(ElementId::new(1), DependencySet::DirectSupported).unwrap();
/// assert_eq!(supported, &[ElementId::new(2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfiguration,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    pub fn new(config: GraphConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfiguration {
        &self.config
    }

    /// The risk classifier for this builder's thresholds and counting method.
    pub fn risk(&self) -> RiskClassifier {
        RiskClassifier::from_config(&self.config)
    }

    /// Build the dependency graph of one model snapshot.
    ///
    /// Elements without geometry are skipped. The cache is refilled when it
    /// is empty or the configuration asks for it, and otherwise brought in
    /// line with `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadpathError::DuplicateElement`] if two elements share an
    /// id, before the cache is touched, and
    /// [`LoadpathError::StructuralCycle`] if the support relation turns out
    /// to be cyclic.
    pub fn build<E, K>(
        &self,
        cache: &mut ElementCache<K::Solid>,
        elements: &[E],
        kernel: &K,
    ) -> Result<GraphView, LoadpathError>
    where
        E: Element<Solid = K::Solid>,
        K: GeometryKernel,
    {
        let participating: Vec<&E> = elements.iter().filter(|e| e.has_geometry()).collect();
        let skipped = elements.len() - participating.len();
        if skipped > 0 {
            debug!(skipped; "Skipping elements without geometry");
        }

        let mut seen = HashSet::with_capacity(participating.len());
        if let Some(duplicate) = participating.iter().find(|e| !seen.insert(e.id())) {
            return Err(LoadpathError::DuplicateElement(duplicate.id()));
        }

        info!(elements_count = participating.len(); "Building dependency graph");
        cache.prepare(&participating, self.config.clear_cache());

        let classifier = ConnectionClassifier::new(&self.config);
        GraphConstructionEngine::new(classifier, kernel).run(cache)?;

        let view = GraphView::project(cache);
        debug!(views_count = view.len(); "Graph projected");
        Ok(view)
    }

    /// Build the graph and, when the configuration enables model coloring,
    /// send every element's risk color to `sink`.
    ///
    /// # Errors
    ///
    /// Same as [`GraphBuilder::build`]. Nothing is painted if the build fails.
    pub fn build_and_paint<E, K>(
        &self,
        cache: &mut ElementCache<K::Solid>,
        elements: &[E],
        kernel: &K,
        sink: impl ColorSink,
    ) -> Result<GraphView, LoadpathError>
    where
        E: Element<Solid = K::Solid>,
        K: GeometryKernel,
    {
        let view = self.build(cache, elements, kernel)?;
        if self.config.color_model() {
            self.paint(&view, sink);
        }
        Ok(view)
    }

    /// Send the model override color of every element in `view` to `sink`.
    pub fn paint(&self, view: &GraphView, mut sink: impl ColorSink) {
        let risk = self.risk();
        for element in view {
            sink.override_color(element.id(), risk.classify(element).model_color());
        }
        info!(elements_count = view.len(); "Model colors applied");
    }

    /// Render the graph held by `cache` as a Graphviz DOT document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadpathError::Export`] if the cache holds a connection to
    /// an element it does not contain.
    pub fn to_dot<S>(&self, cache: &ElementCache<S>) -> Result<String, LoadpathError> {
        if cache.is_empty() {
            warn!("Rendering an empty graph");
        }
        let mut exporter = export::dot::DotExporter::new();
        exporter.export_graph(cache, &self.risk())?;
        info!("DOT graph rendered successfully");
        Ok(exporter.into_output())
    }
}
