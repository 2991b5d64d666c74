//! Element cache shared across graph builds.
//!
//! Reading geometry from a modelling host is by far the most expensive part of
//! a build. The [`ElementCache`] keeps one [`GraphNode`] per element so that
//! repeated builds over the same model snapshot only redo the connectivity
//! pass. Callers own the cache and hand it to every build of one analysis
//! session.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, info};

use loadpath_core::{element::ElementId, host::Element};

use super::node::GraphNode;
use crate::error::LoadpathError;

/// Graph nodes keyed by element id, in model order.
///
/// Type parameters:
/// - `S`: The host's solid type
#[derive(Debug, Clone)]
pub struct ElementCache<S> {
    nodes: IndexMap<ElementId, GraphNode<S>>,
}

impl<S> Default for ElementCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ElementCache<S> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Returns the number of cached elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks if an element with the given id is cached.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the node for the given id.
    ///
    /// # Errors
    ///
    /// Returns [`LoadpathError::UnknownElement`] if the element is not cached.
    pub fn node(&self, id: ElementId) -> Result<&GraphNode<S>, LoadpathError> {
        self.nodes.get(&id).ok_or(LoadpathError::UnknownElement(id))
    }

    pub(crate) fn node_mut(&mut self, id: ElementId) -> Result<&mut GraphNode<S>, LoadpathError> {
        self.nodes
            .get_mut(&id)
            .ok_or(LoadpathError::UnknownElement(id))
    }

    /// Returns an iterator over all nodes in model order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode<S>> {
        self.nodes.values()
    }

    /// Drops every cached element.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Brings the cache in line with a model snapshot and resets connectivity.
    ///
    /// When the cache is empty or `rebuild` is set, every node is created
    /// afresh from `elements`. Otherwise cached nodes are reused: elements new
    /// to the snapshot are added, elements gone from it are evicted, and the
    /// node order follows `elements`. In both cases all connections and
    /// dependents are cleared so a new connectivity pass starts clean.
    ///
    /// `elements` must not contain duplicate ids.
    pub(crate) fn prepare<E>(&mut self, elements: &[&E], rebuild: bool)
    where
        E: Element<Solid = S> + ?Sized,
    {
        if rebuild || self.nodes.is_empty() {
            self.nodes = elements
                .iter()
                .map(|element| (element.id(), GraphNode::from_element(*element)))
                .collect();
            info!(elements_count = self.nodes.len(); "Element cache filled");
            return;
        }

        let positions: HashMap<ElementId, usize> = elements
            .iter()
            .enumerate()
            .map(|(position, element)| (element.id(), position))
            .collect();

        let before = self.nodes.len();
        self.nodes.retain(|id, _| positions.contains_key(id));
        let evicted = before - self.nodes.len();

        let mut added = 0;
        for element in elements {
            if !self.nodes.contains_key(&element.id()) {
                self.nodes
                    .insert(element.id(), GraphNode::from_element(*element));
                added += 1;
            }
        }
        self.nodes
            .sort_by(|a, _, b, _| positions[a].cmp(&positions[b]));

        for node in self.nodes.values_mut() {
            node.clear_connections();
        }

        debug!(
            reused = before - evicted,
            added,
            evicted;
            "Element cache reused"
        );
    }
}
