//! Connection classification between two intersecting elements.
//!
//! The classification is a stacking heuristic on the vertical axis: an
//! element whose extent sits at or above another's, or inside it, is supported
//! by it. One extra rule keeps floors from being counted as a second support
//! for columns and structural walls that already rest on something.

use loadpath_core::geometry::Extent;

use crate::{
    config::GraphConfiguration,
    structure::{Connection, ConnectionType, GraphNode},
};

/// Decides how element `a` relates to element `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionClassifier {
    floor_supports_any_above_column: bool,
}

impl ConnectionClassifier {
    /// Creates a classifier for the given build configuration.
    pub fn new(config: &GraphConfiguration) -> Self {
        Self {
            floor_supports_any_above_column: config.floor_supports_any_above_column(),
        }
    }

    /// Classifies two vertical extents, from `a`'s point of view.
    ///
    /// Extents that coincide within tolerance are [`ConnectionType::Beside`].
    /// Otherwise `a` is supported by `b` when it sits at or above `b` or lies
    /// within it, and supports `b` in the mirrored cases.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loadpath::{ConnectionClassifier, ConnectionType};
    /// # use loadpath_core::geometry::Extent;
    /// let column = Extent::new(0.0, 3.0);
    /// let beam = Extent::new(3.0, 3.5);
    ///
    /// assert_eq!(ConnectionClassifier::base(beam, column), ConnectionType::SupportedBy);
    /// assert_eq!(ConnectionClassifier::base(column, beam), ConnectionType::Supporting);
    /// assert_eq!(ConnectionClassifier::base(column, column), ConnectionType::Beside);
    /// ```
    pub fn base(a: Extent, b: Extent) -> ConnectionType {
        if a.coincides_with(b) {
            ConnectionType::Beside
        } else if a.is_above(b) || a.is_contained_by(b) {
            ConnectionType::SupportedBy
        } else if a.is_below(b) || a.contains(b) {
            ConnectionType::Supporting
        } else {
            ConnectionType::Beside
        }
    }

    /// Classifies the pair `(a, b)`.
    ///
    /// `recorded` holds the connections already recorded for `a` in the graph
    /// built so far. A column or structural wall that already rests on
    /// something is not also supported by a floor it intersects, unless the
    /// configuration allows it; the pair becomes [`ConnectionType::NotKnown`].
    pub fn classify<S>(&self, a: &GraphNode<S>, b: &GraphNode<S>, recorded: &[Connection]) -> ConnectionType {
        let kind = Self::base(a.bounding_box().vertical(), b.bounding_box().vertical());
        if kind != ConnectionType::SupportedBy || self.floor_supports_any_above_column {
            return kind;
        }

        let dominant = a.category().is_column() || (a.category().is_wall() && a.is_structural());
        let already_supported = recorded
            .iter()
            .any(|connection| connection.kind() == ConnectionType::SupportedBy);

        if b.category().is_floor() && dominant && already_supported {
            ConnectionType::NotKnown
        } else {
            kind
        }
    }

    /// Classifies `(a, b)` against `a`'s recorded connections and returns the
    /// pair of records: the one `a` stores and the one `b` stores.
    pub fn connect<S>(&self, a: &GraphNode<S>, b: &GraphNode<S>) -> (Connection, Connection) {
        let kind = self.classify(a, b, a.connections());
        let forward = Connection::new(b.id(), kind, b.is_structural());
        let backward = forward.mirrored(a.id(), a.is_structural());
        (forward, backward)
    }
}

#[cfg(test)]
mod tests {
    use loadpath_core::{
        element::{ElementId, ModelElement, STRUCTURAL_PARAMETER},
        geometry::{BoundingBox, Point3},
    };

    use super::*;

    fn node(id: i64, category: &str, z: (f64, f64)) -> GraphNode<BoundingBox> {
        let solid = BoundingBox::from_corners(Point3::new(0.0, 0.0, z.0), Point3::new(1.0, 1.0, z.1));
        GraphNode::from_element(&ModelElement::new(id, category, vec![solid]))
    }

    fn structural_wall(id: i64, z: (f64, f64)) -> GraphNode<BoundingBox> {
        let solid = BoundingBox::from_corners(Point3::new(0.0, 0.0, z.0), Point3::new(1.0, 1.0, z.1));
        let element = ModelElement::new(id, "Walls", vec![solid]).with_parameter(STRUCTURAL_PARAMETER, "1");
        GraphNode::from_element(&element)
    }

    fn supported_by(id: i64) -> Connection {
        Connection::new(ElementId::new(id), ConnectionType::SupportedBy, true)
    }

    #[test]
    fn test_base_classification() {
        let lower = Extent::new(0.0, 3.0);
        let upper = Extent::new(3.0, 6.0);
        let inner = Extent::new(1.0, 2.0);
        let straddling = Extent::new(-1.0, 4.0);

        assert_eq!(ConnectionClassifier::base(upper, lower), ConnectionType::SupportedBy);
        assert_eq!(ConnectionClassifier::base(lower, upper), ConnectionType::Supporting);
        assert_eq!(ConnectionClassifier::base(inner, lower), ConnectionType::SupportedBy);
        assert_eq!(ConnectionClassifier::base(lower, inner), ConnectionType::Supporting);
        assert_eq!(ConnectionClassifier::base(straddling, lower), ConnectionType::Supporting);
    }

    #[test]
    fn test_identical_extents_are_beside() {
        let a = Extent::new(0.0, 3.0);
        let b = Extent::new(0.00002, 2.99999);

        assert_eq!(ConnectionClassifier::base(a, b), ConnectionType::Beside);
        assert_eq!(ConnectionClassifier::base(b, a), ConnectionType::Beside);
    }

    #[test]
    fn test_supported_column_on_floor_is_not_known() {
        let classifier = ConnectionClassifier::new(&GraphConfiguration::default());
        let floor = node(1, "Floors", (2.8, 3.0));
        let column = node(2, "Structural Columns", (3.0, 6.0));

        assert_eq!(
            classifier.classify(&column, &floor, &[supported_by(3)]),
            ConnectionType::NotKnown
        );
    }

    #[test]
    fn test_unsupported_column_rests_on_floor() {
        let classifier = ConnectionClassifier::new(&GraphConfiguration::default());
        let floor = node(1, "Floors", (2.8, 3.0));
        let column = node(2, "Structural Columns", (3.0, 6.0));

        assert_eq!(classifier.classify(&column, &floor, &[]), ConnectionType::SupportedBy);
    }

    #[test]
    fn test_rule_can_be_disabled() {
        let config = GraphConfiguration::default().with_floor_supports_any_above_column(true);
        let classifier = ConnectionClassifier::new(&config);
        let floor = node(1, "Floors", (2.8, 3.0));
        let column = node(2, "Structural Columns", (3.0, 6.0));

        assert_eq!(
            classifier.classify(&column, &floor, &[supported_by(3)]),
            ConnectionType::SupportedBy
        );
    }

    #[test]
    fn test_rule_applies_to_structural_walls_only() {
        let classifier = ConnectionClassifier::new(&GraphConfiguration::default());
        let floor = node(1, "Floors", (2.8, 3.0));
        let bearing_wall = structural_wall(2, (3.0, 6.0));
        let partition = node(3, "Walls", (3.0, 6.0));

        assert_eq!(
            classifier.classify(&bearing_wall, &floor, &[supported_by(9)]),
            ConnectionType::NotKnown
        );
        assert_eq!(
            classifier.classify(&partition, &floor, &[supported_by(9)]),
            ConnectionType::SupportedBy
        );
    }

    #[test]
    fn test_rule_ignores_non_support_records() {
        let classifier = ConnectionClassifier::new(&GraphConfiguration::default());
        let floor = node(1, "Floors", (2.8, 3.0));
        let column = node(2, "Structural Columns", (3.0, 6.0));
        let recorded = [
            Connection::new(ElementId::new(5), ConnectionType::Supporting, true),
            Connection::new(ElementId::new(6), ConnectionType::Beside, false),
        ];

        assert_eq!(classifier.classify(&column, &floor, &recorded), ConnectionType::SupportedBy);
    }

    #[test]
    fn test_connect_produces_mirrored_pair() {
        let classifier = ConnectionClassifier::default();
        let column = node(1, "Structural Columns", (0.0, 3.0));
        let beam = node(2, "Structural Framing", (3.0, 3.5));

        let (forward, backward) = classifier.connect(&column, &beam);

        assert_eq!(forward.connected_with(), ElementId::new(2));
        assert_eq!(forward.kind(), ConnectionType::Supporting);
        assert_eq!(backward.connected_with(), ElementId::new(1));
        assert_eq!(backward.kind(), ConnectionType::SupportedBy);
        assert!(backward.is_connected_with_structural());
    }
}
