//! Building element identity and classification.
//!
//! - [`ElementId`] - Stable integer identity of an element in the host model
//! - [`Category`] - The host's category label, with the category tests used
//!   for processing order and disambiguation
//! - [`ModelElement`] - A plain element record whose solids are boxes, usable
//!   as a host for models loaded from files

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{geometry::BoundingBox, host::Element};

/// Name of the parameter that flags an element as load bearing.
pub const STRUCTURAL_PARAMETER: &str = "Structural";

/// Name of the parameter holding the element's volume.
pub const VOLUME_PARAMETER: &str = "Volume";

/// Name of the parameter holding the element's material.
pub const MATERIAL_PARAMETER: &str = "Material";

/// Stable identity of an element within one model snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(i64);

impl ElementId {
    /// Creates an identifier from the host's integer id
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer id
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ElementId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category label of an element, as reported by the host.
///
/// Host categories are free-form names such as `"Structural Columns"` or
/// `"Floors"`. The tests below match on substrings, so `"Columns"` and
/// `"Structural Columns"` are both columns.
///
/// # Examples
///
/// ```
/// use loadpath_core::element::Category;
///
/// let category = Category::new("Structural Framing");
/// assert!(category.is_framing());
/// assert!(category.implies_structural());
/// assert!(!Category::new("Walls").implies_structural());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    const COLUMN: &'static str = "Column";
    const WALL: &'static str = "Wall";
    const FRAMING: &'static str = "Framing";
    const FOUNDATION: &'static str = "Foundation";
    const FLOOR: &'static str = "Floor";

    /// Creates a category from its host label
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the host label
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_column(&self) -> bool {
        self.0.contains(Self::COLUMN)
    }

    pub fn is_wall(&self) -> bool {
        self.0.contains(Self::WALL)
    }

    pub fn is_framing(&self) -> bool {
        self.0.contains(Self::FRAMING)
    }

    pub fn is_foundation(&self) -> bool {
        self.0.contains(Self::FOUNDATION)
    }

    pub fn is_floor(&self) -> bool {
        self.0.contains(Self::FLOOR)
    }

    /// Returns `true` for categories that are load bearing by definition:
    /// foundations, columns and framing.
    pub fn implies_structural(&self) -> bool {
        self.is_foundation() || self.is_column() || self.is_framing()
    }

    /// Returns the label with the `"Structural"` qualifier removed, for
    /// compact display names. Surrounding whitespace is left untouched.
    pub fn short_name(&self) -> String {
        self.0.replace(STRUCTURAL_PARAMETER, "")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decides whether a host element is structural.
///
/// An element is structural when its category implies it, or when its
/// [`STRUCTURAL_PARAMETER`] parameter is set to `"1"`.
pub fn is_structural<E: Element + ?Sized>(element: &E) -> bool {
    Category::new(element.category()).implies_structural()
        || element
            .parameter(STRUCTURAL_PARAMETER)
            .is_some_and(|value| value == "1")
}

/// An element record whose solids are axis-aligned boxes.
///
/// This is the element shape used by file-based models. The bounding box is
/// the union of all solids; an element without solids has no geometry.
///
/// # Examples
///
/// ```
/// use loadpath_core::{element::ModelElement, host::Element};
///
/// let json = r#"{
///     "id": 7,
///     "category": "Structural Columns",
///     "parameters": { "Volume": "0.48" },
///     "solids": [{ "min": [0, 0, 0], "max": [0.4, 0.4, 3.0] }]
/// }"#;
/// let column: ModelElement = serde_json::from_str(json).unwrap();
///
/// assert_eq!(column.id().value(), 7);
/// assert!(column.has_geometry());
/// assert_eq!(column.parameter("Volume").as_deref(), Some("0.48"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelElement {
    id: ElementId,
    category: String,
    #[serde(default)]
    parameters: HashMap<String, String>,
    #[serde(default)]
    solids: Vec<BoundingBox>,
}

impl ModelElement {
    /// Creates an element with the given id, category and solids.
    pub fn new(id: impl Into<ElementId>, category: impl Into<String>, solids: Vec<BoundingBox>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            parameters: HashMap::new(),
            solids,
        }
    }

    /// Sets a named parameter and returns the modified element
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

impl Element for ModelElement {
    type Solid = BoundingBox;

    fn id(&self) -> ElementId {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn has_geometry(&self) -> bool {
        !self.solids.is_empty()
    }

    fn solids(&self) -> Vec<BoundingBox> {
        self.solids.clone()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.solids
            .iter()
            .copied()
            .reduce(|acc, solid| acc.merge(&solid))
            .unwrap_or_default()
    }

    fn parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;

    fn solid(min: [f64; 3], max: [f64; 3]) -> BoundingBox {
        BoundingBox::from_corners(min.into(), max.into())
    }

    #[test]
    fn test_category_matching() {
        assert!(Category::new("Structural Columns").is_column());
        assert!(Category::new("Columns").is_column());
        assert!(Category::new("Walls").is_wall());
        assert!(Category::new("Structural Foundations").is_foundation());
        assert!(Category::new("Floors").is_floor());
        assert!(!Category::new("Generic Models").is_floor());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(Category::new("Structural Framing").short_name(), " Framing");
        assert_eq!(Category::new("Floors").short_name(), "Floors");
    }

    #[test]
    fn test_structural_from_category() {
        let beam = ModelElement::new(1, "Structural Framing", vec![]);
        let wall = ModelElement::new(2, "Walls", vec![]);

        assert!(is_structural(&beam));
        assert!(!is_structural(&wall));
    }

    #[test]
    fn test_structural_from_parameter() {
        let wall = ModelElement::new(2, "Walls", vec![]).with_parameter(STRUCTURAL_PARAMETER, "1");
        let plain = ModelElement::new(3, "Walls", vec![]).with_parameter(STRUCTURAL_PARAMETER, "0");

        assert!(is_structural(&wall));
        assert!(!is_structural(&plain));
    }

    #[test]
    fn test_bounding_box_spans_all_solids() {
        let element = ModelElement::new(
            4,
            "Stairs",
            vec![solid([0.0, 0.0, 0.0], [1.0, 1.0, 0.2]), solid([0.0, 1.0, 0.2], [1.0, 2.0, 0.4])],
        );

        let bbox = element.bounding_box();
        assert_eq!(bbox.min(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bbox.max(), Point3::new(1.0, 2.0, 0.4));
    }

    #[test]
    fn test_element_without_solids_has_no_geometry() {
        let element = ModelElement::new(5, "Rooms", vec![]);
        assert!(!element.has_geometry());
    }

    #[test]
    fn test_element_id_serializes_as_integer() {
        let json = serde_json::to_string(&ElementId::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
