//! Processing order for graph construction.
//!
//! Connections are classified one pair at a time and the floor/column rule
//! looks at connections recorded earlier, so the order in which elements are
//! processed changes the result. Structurally dominant categories go first.

use loadpath_core::element::{Category, ElementId};

use super::node::GraphNode;

/// Priority bucket of an element, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Column,
    StructuralWall,
    Framing,
    Foundation,
    Structural,
    Other,
}

impl Priority {
    /// Returns the first bucket the element falls into.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loadpath::structure::Priority;
    /// # use loadpath_core::element::Category;
    /// let wall = Category::new("Walls");
    /// assert_eq!(Priority::of(&wall, true), Priority::StructuralWall);
    /// assert_eq!(Priority::of(&wall, false), Priority::Other);
    /// ```
    pub fn of(category: &Category, structural: bool) -> Self {
        if category.is_column() {
            Priority::Column
        } else if structural && category.is_wall() {
            Priority::StructuralWall
        } else if category.is_framing() {
            Priority::Framing
        } else if category.is_foundation() {
            Priority::Foundation
        } else if structural {
            Priority::Structural
        } else {
            Priority::Other
        }
    }
}

/// Reorders items by [`Priority`], keeping input order within each bucket.
///
/// No item is dropped or duplicated.
pub fn order_by_priority<T>(mut items: Vec<T>, priority: impl Fn(&T) -> Priority) -> Vec<T> {
    items.sort_by_key(|item| priority(item));
    items
}

/// Returns the ids of the given nodes in processing order.
pub fn processing_order<'a, S: 'a>(nodes: impl IntoIterator<Item = &'a GraphNode<S>>) -> Vec<ElementId> {
    let nodes: Vec<&GraphNode<S>> = nodes.into_iter().collect();
    order_by_priority(nodes, |node| Priority::of(node.category(), node.is_structural()))
        .into_iter()
        .map(GraphNode::id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prioritized(entries: &[(&'static str, bool)]) -> Vec<(usize, Priority)> {
        entries
            .iter()
            .enumerate()
            .map(|(idx, (category, structural))| (idx, Priority::of(&Category::new(*category), *structural)))
            .collect()
    }

    #[test]
    fn test_priority_buckets() {
        let cases = [
            ("Structural Columns", true, Priority::Column),
            ("Columns", false, Priority::Column),
            ("Walls", true, Priority::StructuralWall),
            ("Walls", false, Priority::Other),
            ("Structural Framing", true, Priority::Framing),
            ("Structural Foundations", true, Priority::Foundation),
            ("Floors", true, Priority::Structural),
            ("Floors", false, Priority::Other),
        ];

        for (category, structural, expected) in cases {
            assert_eq!(
                Priority::of(&Category::new(category), structural),
                expected,
                "{category} (structural: {structural})"
            );
        }
    }

    #[test]
    fn test_order_is_stable_within_buckets() {
        let items = prioritized(&[
            ("Floors", false),
            ("Structural Foundations", true),
            ("Columns", true),
            ("Walls", true),
            ("Roofs", false),
            ("Structural Columns", true),
            ("Floors", true),
            ("Structural Framing", true),
        ]);

        let ordered: Vec<usize> = order_by_priority(items, |(_, priority)| *priority)
            .into_iter()
            .map(|(idx, _)| idx)
            .collect();

        assert_eq!(ordered, vec![2, 5, 3, 7, 1, 6, 0, 4]);
    }

    #[test]
    fn test_order_keeps_every_item() {
        let items = prioritized(&[("Columns", true), ("Columns", true), ("Doors", false)]);
        let ordered = order_by_priority(items.clone(), |(_, priority)| *priority);

        assert_eq!(ordered.len(), items.len());
        for item in &items {
            assert!(ordered.contains(item));
        }
    }
}
