//! Graph construction: connectivity discovery followed by dependent
//! propagation.
//!
//! Elements are taken in processing order. Each element is tested against
//! every element after it; hits are classified and recorded on both sides,
//! then the element's dependents are pushed up its support chain before the
//! next element is handled.

mod propagate;

use log::{debug, info};

use loadpath_core::{element::ElementId, host::GeometryKernel};

use crate::{
    classify::ConnectionClassifier,
    error::LoadpathError,
    structure::{self, ElementCache},
};

use propagate::DependencyPropagator;

/// Runs one connectivity pass over a prepared cache.
pub(crate) struct GraphConstructionEngine<'a, K> {
    classifier: ConnectionClassifier,
    kernel: &'a K,
}

impl<'a, K> GraphConstructionEngine<'a, K>
where
    K: GeometryKernel,
{
    pub(crate) fn new(classifier: ConnectionClassifier, kernel: &'a K) -> Self {
        Self { classifier, kernel }
    }

    /// Connects and propagates every cached node.
    ///
    /// The cache must have been prepared for this build, so that no node
    /// carries connections from an earlier one.
    pub(crate) fn run(&self, cache: &mut ElementCache<K::Solid>) -> Result<(), LoadpathError> {
        let order = structure::processing_order(cache.nodes());
        info!(elements_count = order.len(); "Discovering connections");

        let mut connections_count = 0;
        for (idx, &id) in order.iter().enumerate() {
            connections_count += self.connect(cache, id, &order[idx + 1..])?;

            let dependents = cache.node(id)?.all_dependent_ids();
            DependencyPropagator::new(cache).propagate(id, &dependents)?;
        }

        info!(connections_count; "Connections discovered");
        Ok(())
    }

    /// Records the connections between `id` and every intersecting element in
    /// `remainder`. Returns how many were found.
    fn connect(
        &self,
        cache: &mut ElementCache<K::Solid>,
        id: ElementId,
        remainder: &[ElementId],
    ) -> Result<usize, LoadpathError> {
        let mut found = 0;
        for &candidate in remainder {
            let (forward, backward) = {
                let element = cache.node(id)?;
                let other = cache.node(candidate)?;
                if !self
                    .kernel
                    .boxes_intersect(&element.bounding_box(), &other.bounding_box())
                {
                    continue;
                }
                if !self.kernel.any_intersect(element.solids(), other.solids()) {
                    continue;
                }
                self.classifier.connect(element, other)
            };

            debug!(
                element_id:% = id,
                candidate_id:% = candidate,
                kind:% = forward.kind();
                "Connection recorded"
            );
            cache.node_mut(id)?.add_connection(forward);
            cache.node_mut(candidate)?.add_connection(backward);
            found += 1;
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use loadpath_core::{
        element::ModelElement,
        geometry::{BoundingBox, Point3},
        host::BoxKernel,
    };

    use super::*;
    use crate::{
        config::GraphConfiguration,
        structure::{ConnectionType, GraphNode},
    };

    fn slab(id: i64, category: &str, x: (f64, f64), z: (f64, f64)) -> ModelElement {
        let solid = BoundingBox::from_corners(Point3::new(x.0, 0.0, z.0), Point3::new(x.1, 1.0, z.1));
        ModelElement::new(id, category, vec![solid])
    }

    fn built(elements: &[ModelElement]) -> Result<ElementCache<BoundingBox>, LoadpathError> {
        let refs: Vec<&ModelElement> = elements.iter().collect();
        let mut cache = ElementCache::new();
        cache.prepare(&refs, true);

        let classifier = ConnectionClassifier::new(&GraphConfiguration::default());
        GraphConstructionEngine::new(classifier, &BoxKernel).run(&mut cache)?;
        Ok(cache)
    }

    fn node(cache: &ElementCache<BoundingBox>, id: i64) -> &GraphNode<BoundingBox> {
        cache.node(ElementId::new(id)).unwrap()
    }

    #[test]
    fn test_disjoint_elements_stay_unconnected() {
        let cache = built(&[
            slab(1, "Floors", (0.0, 1.0), (0.0, 1.0)),
            slab(2, "Floors", (5.0, 6.0), (0.0, 1.0)),
        ])
        .unwrap();

        assert!(node(&cache, 1).connections().is_empty());
        assert!(node(&cache, 2).connections().is_empty());
    }

    #[test]
    fn test_each_pair_recorded_once_per_side() {
        let cache = built(&[
            slab(1, "Structural Foundations", (0.0, 3.0), (0.0, 1.0)),
            slab(2, "Structural Columns", (0.0, 1.0), (1.0, 4.0)),
            slab(3, "Structural Columns", (2.0, 3.0), (1.0, 4.0)),
        ])
        .unwrap();

        assert_eq!(node(&cache, 1).connections().len(), 2);
        assert_eq!(node(&cache, 2).connections().len(), 1);
        assert_eq!(node(&cache, 3).connections().len(), 1);
        assert_eq!(
            node(&cache, 1).direct_supported_ids(),
            vec![ElementId::new(2), ElementId::new(3)]
        );
    }

    #[test]
    fn test_floor_under_supported_column_is_not_known() {
        // Columns go first and foundations before floors, so the column
        // already rests on the foundation when it meets the floor.
        let cache = built(&[
            slab(1, "Floors", (0.0, 4.0), (0.8, 1.0)),
            slab(2, "Structural Foundations", (0.0, 4.0), (0.0, 0.8)),
            slab(3, "Structural Columns", (1.0, 2.0), (0.8, 4.0)),
        ])
        .unwrap();

        let column = node(&cache, 3);
        let kinds: Vec<(i64, ConnectionType)> = column
            .connections()
            .iter()
            .map(|c| (c.connected_with().value(), c.kind()))
            .collect();

        assert_eq!(
            kinds,
            vec![(2, ConnectionType::SupportedBy), (1, ConnectionType::NotKnown)]
        );
    }

    #[test]
    fn test_stack_propagates_transitively() {
        let cache = built(&[
            slab(1, "Structural Foundations", (0.0, 1.0), (0.0, 1.0)),
            slab(2, "Structural Columns", (0.0, 1.0), (1.0, 4.0)),
            slab(3, "Structural Framing", (0.0, 1.0), (4.0, 4.5)),
        ])
        .unwrap();

        assert_eq!(
            node(&cache, 1).all_dependent_ids(),
            vec![ElementId::new(3), ElementId::new(2)]
        );
        assert_eq!(node(&cache, 2).all_dependent_ids(), vec![ElementId::new(3)]);
        assert!(node(&cache, 3).all_dependent_ids().is_empty());
    }

    #[test]
    fn test_support_cycle_fails_build() {
        let err = built(&[
            slab(1, "Generic Models", (0.0, 1.0), (0.0, 1.0)),
            slab(2, "Generic Models", (0.0, 1.0), (0.00006, 2.0)),
            slab(3, "Generic Models", (0.0, 1.0), (0.00012, 3.0)),
        ])
        .unwrap_err();

        match err {
            LoadpathError::StructuralCycle { cycle } => {
                let cycle: Vec<i64> = cycle.into_iter().map(ElementId::value).collect();
                assert_eq!(cycle, vec![2, 3, 1, 2]);
            }
            other => panic!("expected a cycle error, got {other:?}"),
        }
    }
}
