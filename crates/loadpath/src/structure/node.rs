//! Graph nodes and the connections between them.
//!
//! A [`GraphNode`] is created once per element when the element cache is
//! filled. Its attributes and geometry are copied from the host element at
//! that point; its [`Connection`]s and non-direct dependents are rebuilt on
//! every graph build.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use loadpath_core::{
    element::{self, Category, ElementId, MATERIAL_PARAMETER, VOLUME_PARAMETER},
    geometry::BoundingBox,
    host::Element,
};

use crate::{config::DependencySet, risk::DependencyCounts};

/// How two intersecting elements relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// This element carries the other one.
    Supporting,
    /// This element rests on the other one.
    SupportedBy,
    /// The elements intersect without a vertical load relation.
    Beside,
    /// The elements intersect, but the direction of support was left
    /// unresolved by the floor/column rule.
    NotKnown,
}

impl ConnectionType {
    /// Returns the type the other element records for the same pair.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loadpath::ConnectionType;
    /// assert_eq!(ConnectionType::Supporting.mirror(), ConnectionType::SupportedBy);
    /// assert_eq!(ConnectionType::Beside.mirror(), ConnectionType::Beside);
    /// ```
    pub fn mirror(self) -> Self {
        match self {
            ConnectionType::Supporting => ConnectionType::SupportedBy,
            ConnectionType::SupportedBy => ConnectionType::Supporting,
            ConnectionType::Beside => ConnectionType::Beside,
            ConnectionType::NotKnown => ConnectionType::NotKnown,
        }
    }

    /// Short label used on graph links.
    pub fn label(self) -> &'static str {
        match self {
            ConnectionType::Supporting => "S",
            ConnectionType::SupportedBy => "SB",
            ConnectionType::Beside => "B",
            ConnectionType::NotKnown => "U",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One side of a discovered connection, stored on the node it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connection {
    connected_with: ElementId,
    kind: ConnectionType,
    connected_with_structural: bool,
}

impl Connection {
    /// Creates a connection to `connected_with`.
    pub fn new(connected_with: ElementId, kind: ConnectionType, connected_with_structural: bool) -> Self {
        Self {
            connected_with,
            kind,
            connected_with_structural,
        }
    }

    /// Returns the connection the other element records, pointing back at
    /// `origin`.
    pub fn mirrored(&self, origin: ElementId, origin_structural: bool) -> Self {
        Self::new(origin, self.kind.mirror(), origin_structural)
    }

    /// Id of the element on the other side
    pub fn connected_with(&self) -> ElementId {
        self.connected_with
    }

    pub fn kind(&self) -> ConnectionType {
        self.kind
    }

    /// Whether the element on the other side is structural
    pub fn is_connected_with_structural(&self) -> bool {
        self.connected_with_structural
    }
}

/// One element of the building model inside the dependency graph.
///
/// Type parameters:
/// - `S`: The host's solid type, kept for intersection tests
#[derive(Debug, Clone)]
pub struct GraphNode<S> {
    id: ElementId,
    structural: bool,
    category: Category,
    material: Option<String>,
    volume: Option<String>,
    solids: Vec<S>,
    bounding_box: BoundingBox,
    connections: Vec<Connection>,
    non_direct_dependents: IndexSet<ElementId>,
}

impl<S> GraphNode<S> {
    /// Creates a node from a host element, copying its attributes and geometry.
    pub fn from_element<E>(source: &E) -> Self
    where
        E: Element<Solid = S> + ?Sized,
    {
        Self {
            id: source.id(),
            structural: element::is_structural(source),
            category: Category::new(source.category()),
            material: source.parameter(MATERIAL_PARAMETER),
            volume: source.parameter(VOLUME_PARAMETER),
            solids: source.solids(),
            bounding_box: source.bounding_box(),
            connections: Vec::new(),
            non_direct_dependents: IndexSet::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn is_structural(&self) -> bool {
        self.structural
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn volume(&self) -> Option<&str> {
        self.volume.as_deref()
    }

    pub fn solids(&self) -> &[S] {
        &self.solids
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Connections in discovery order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub(crate) fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Adds ids to the non-direct dependents, ignoring ids already present.
    pub(crate) fn add_non_direct_dependents(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.non_direct_dependents.extend(ids);
    }

    /// Drops connection and dependent data, keeping attributes and geometry.
    pub(crate) fn clear_connections(&mut self) {
        self.connections.clear();
        self.non_direct_dependents.clear();
    }

    fn connected_where(&self, predicate: impl Fn(&Connection) -> bool) -> Vec<ElementId> {
        self.connections
            .iter()
            .filter(|&connection| predicate(connection))
            .map(Connection::connected_with)
            .collect()
    }

    /// Every element this node intersects.
    pub fn direct_connected_ids(&self) -> Vec<ElementId> {
        self.connected_where(|_| true)
    }

    pub fn direct_connected_structural_ids(&self) -> Vec<ElementId> {
        self.connected_where(Connection::is_connected_with_structural)
    }

    /// Intersecting elements except those this node rests on.
    pub fn non_supporting_direct_ids(&self) -> Vec<ElementId> {
        self.connected_where(|c| c.kind() != ConnectionType::SupportedBy)
    }

    /// Elements resting directly on this node.
    pub fn direct_supported_ids(&self) -> Vec<ElementId> {
        self.connected_where(|c| c.kind() == ConnectionType::Supporting)
    }

    /// Elements this node rests on directly.
    pub fn supported_by_ids(&self) -> Vec<ElementId> {
        self.connected_where(|c| c.kind() == ConnectionType::SupportedBy)
    }

    pub fn non_direct_dependent_ids(&self) -> Vec<ElementId> {
        self.non_direct_dependents.iter().copied().collect()
    }

    /// Non-direct dependents followed by direct-supported ids, without duplicates.
    pub fn all_dependent_ids(&self) -> Vec<ElementId> {
        let mut all = self.non_direct_dependents.clone();
        all.extend(self.direct_supported_ids());
        all.into_iter().collect()
    }

    /// Returns the ids of one of the six derived sets.
    pub fn ids(&self, set: DependencySet) -> Vec<ElementId> {
        match set {
            DependencySet::AllDependent => self.all_dependent_ids(),
            DependencySet::DirectSupported => self.direct_supported_ids(),
            DependencySet::NonDirectDependent => self.non_direct_dependent_ids(),
            DependencySet::DirectConnected => self.direct_connected_ids(),
            DependencySet::DirectConnectedStructural => self.direct_connected_structural_ids(),
            DependencySet::NonSupportingDirect => self.non_supporting_direct_ids(),
        }
    }
}

impl<S> DependencyCounts for GraphNode<S> {
    fn count(&self, set: DependencySet) -> usize {
        self.ids(set).len()
    }
}
