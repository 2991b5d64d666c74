//! Read-only projection of a built graph.
//!
//! Views are the output of a build. They copy everything a consumer needs out
//! of the cache, so the cache can be reused or dropped afterwards.

use serde::Serialize;

use loadpath_core::element::ElementId;

use crate::{
    config::DependencySet,
    error::LoadpathError,
    risk::DependencyCounts,
    structure::{ElementCache, GraphNode},
};

/// Snapshot of one element after a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphElementView {
    id: ElementId,
    structural: bool,
    category: String,
    material: Option<String>,
    volume: Option<String>,
    direct_connected: Vec<ElementId>,
    direct_connected_structural: Vec<ElementId>,
    non_supporting_direct: Vec<ElementId>,
    direct_supported: Vec<ElementId>,
    non_direct_dependent: Vec<ElementId>,
    all_dependent: Vec<ElementId>,
}

impl GraphElementView {
    fn from_node<S>(node: &GraphNode<S>) -> Self {
        Self {
            id: node.id(),
            structural: node.is_structural(),
            category: node.category().name().to_string(),
            material: node.material().map(str::to_string),
            volume: node.volume().map(str::to_string),
            direct_connected: node.direct_connected_ids(),
            direct_connected_structural: node.direct_connected_structural_ids(),
            non_supporting_direct: node.non_supporting_direct_ids(),
            direct_supported: node.direct_supported_ids(),
            non_direct_dependent: node.non_direct_dependent_ids(),
            all_dependent: node.all_dependent_ids(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn is_structural(&self) -> bool {
        self.structural
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn volume(&self) -> Option<&str> {
        self.volume.as_deref()
    }

    /// Returns the ids of one of the six derived sets.
    pub fn ids(&self, set: DependencySet) -> &[ElementId] {
        match set {
            DependencySet::AllDependent => &self.all_dependent,
            DependencySet::DirectSupported => &self.direct_supported,
            DependencySet::NonDirectDependent => &self.non_direct_dependent,
            DependencySet::DirectConnected => &self.direct_connected,
            DependencySet::DirectConnectedStructural => &self.direct_connected_structural,
            DependencySet::NonSupportingDirect => &self.non_supporting_direct,
        }
    }
}

impl DependencyCounts for GraphElementView {
    fn count(&self, set: DependencySet) -> usize {
        self.ids(set).len()
    }
}

/// All element views of one build, in model order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GraphView {
    elements: Vec<GraphElementView>,
}

impl GraphView {
    /// Projects every cached node into a view, keeping cache order.
    ///
    /// Projection only reads the cache, so projecting the same cache twice
    /// gives equal views.
    pub fn project<S>(cache: &ElementCache<S>) -> Self {
        Self {
            elements: cache.nodes().map(GraphElementView::from_node).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GraphElementView> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[GraphElementView] {
        &self.elements
    }

    /// Returns the view of the given element.
    ///
    /// # Errors
    ///
    /// Returns [`LoadpathError::UnknownElement`] if the element was not part
    /// of the build.
    pub fn find(&self, id: ElementId) -> Result<&GraphElementView, LoadpathError> {
        self.elements
            .iter()
            .find(|view| view.id() == id)
            .ok_or(LoadpathError::UnknownElement(id))
    }

    /// Returns one derived id set of the given element.
    ///
    /// # Errors
    ///
    /// Returns [`LoadpathError::UnknownElement`] if the element was not part
    /// of the build.
    pub fn ids(&self, id: ElementId, set: DependencySet) -> Result<&[ElementId], LoadpathError> {
        Ok(self.find(id)?.ids(set))
    }

    pub fn into_inner(self) -> Vec<GraphElementView> {
        self.elements
    }
}

impl<'a> IntoIterator for &'a GraphView {
    type Item = &'a GraphElementView;
    type IntoIter = std::slice::Iter<'a, GraphElementView>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
