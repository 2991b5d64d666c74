//! Geometric primitives for building model elements.
//!
//! This module provides the small set of geometric types the dependency graph
//! needs from a building model: points, axis-aligned bounding boxes and the
//! vertical extent used to decide which element rests on which.
//!
//! # Overview
//!
//! - [`Point3`] - A 3D coordinate in model space
//! - [`BoundingBox`] - An axis-aligned box defined by a minimum and maximum corner
//! - [`Extent`] - A closed interval on the vertical axis, with stacking predicates
//!
//! # Coordinate System
//!
//! Loadpath follows the convention of most building modelling hosts:
//!
//! ```text
//!        +Z (up)
//!         │
//!         │   +Y
//!         │  ╱
//!         │ ╱
//!         │╱
//!         └──────────► +X
//! ```
//!
//! Only the `Z` axis takes part in support classification. The `X` and `Y`
//! axes matter for intersection tests only.

use serde::Deserialize;
use thiserror::Error;

/// Tolerance used when comparing coordinates on the vertical axis.
pub const TOLERANCE: f64 = 1e-4;

/// Errors raised when constructing geometric values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("bounding box minimum {min:?} exceeds maximum {max:?}")]
    InvertedBounds { min: Point3, max: Point3 },

    #[error("coordinate is not a finite number")]
    NonFinite,
}

/// A point in model space.
///
/// # Examples
///
/// ```
/// # use loadpath_core::geometry::Point3;
/// let p = Point3::new(1.0, 2.0, 3.0);
/// assert_eq!(p.z(), 3.0);
///
/// let q = p.min(Point3::new(0.0, 5.0, 3.0));
/// assert_eq!(q, Point3::new(0.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the z-coordinate (elevation) of the point
    pub fn z(self) -> f64 {
        self.z
    }

    /// Returns the component-wise minimum of two points
    pub fn min(self, other: Point3) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Returns the component-wise maximum of two points
    pub fn max(self, other: Point3) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// An axis-aligned bounding box.
///
/// Boxes are closed: two boxes that share a face intersect. This matters for
/// building elements, which are usually modelled face to face (a beam resting
/// on top of a column shares the column's top plane).
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawBoundingBox")]
pub struct BoundingBox {
    min: Point3,
    max: Point3,
}

#[derive(Deserialize)]
struct RawBoundingBox {
    min: Point3,
    max: Point3,
}

impl TryFrom<RawBoundingBox> for BoundingBox {
    type Error = GeometryError;

    fn try_from(raw: RawBoundingBox) -> Result<Self, Self::Error> {
        Self::try_new(raw.min, raw.max)
    }
}

impl BoundingBox {
    /// Creates a bounding box from two opposite corners.
    ///
    /// The corners may be given in any order; the box spans both.
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a bounding box from its minimum and maximum corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvertedBounds`] if `min` exceeds `max` on any
    /// axis and [`GeometryError::NonFinite`] if a coordinate is NaN or
    /// infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loadpath_core::geometry::{BoundingBox, Point3};
    /// let column = BoundingBox::try_new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(0.4, 0.4, 3.0),
    /// ).unwrap();
    /// assert_eq!(column.vertical().max(), 3.0);
    ///
    /// let inverted = BoundingBox::try_new(
    ///     Point3::new(0.0, 0.0, 3.0),
    ///     Point3::new(0.4, 0.4, 0.0),
    /// );
    /// assert!(inverted.is_err());
    /// ```
    pub fn try_new(min: Point3, max: Point3) -> Result<Self, GeometryError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(GeometryError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum corner
    pub fn min(self) -> Point3 {
        self.min
    }

    /// Returns the maximum corner
    pub fn max(self) -> Point3 {
        self.max
    }

    /// Returns the extent of the box on the vertical axis
    pub fn vertical(self) -> Extent {
        Extent {
            min: self.min.z,
            max: self.max.z,
        }
    }

    /// Returns `true` if the two boxes overlap or touch.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loadpath_core::geometry::{BoundingBox, Point3};
    /// let slab = BoundingBox::from_corners(Point3::new(0.0, 0.0, 3.0), Point3::new(6.0, 6.0, 3.2));
    /// let column = BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(0.4, 0.4, 3.0));
    /// let far = BoundingBox::from_corners(Point3::new(10.0, 0.0, 0.0), Point3::new(11.0, 1.0, 3.0));
    ///
    /// assert!(slab.intersects(&column));
    /// assert!(!slab.intersects(&far));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Merges two boxes into the smallest box containing both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// A closed interval on the vertical axis.
///
/// All comparisons allow [`TOLERANCE`] of slack, so extents that differ by
/// less than the tolerance compare as equal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    /// Creates an extent, swapping the bounds if given in reverse order
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the lower bound
    pub fn min(self) -> f64 {
        self.min
    }

    /// Returns the upper bound
    pub fn max(self) -> f64 {
        self.max
    }

    /// Both bounds coincide with `other`'s within tolerance.
    pub fn coincides_with(self, other: Extent) -> bool {
        (self.max - other.max).abs() < TOLERANCE && (self.min - other.min).abs() < TOLERANCE
    }

    /// Both bounds are at or above `other`'s corresponding bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loadpath_core::geometry::Extent;
    /// let beam = Extent::new(3.0, 3.5);
    /// let column = Extent::new(0.0, 3.0);
    ///
    /// assert!(beam.is_above(column));
    /// assert!(!column.is_above(beam));
    /// assert!(column.is_below(beam));
    /// ```
    pub fn is_above(self, other: Extent) -> bool {
        self.max >= other.max - TOLERANCE && self.min >= other.min - TOLERANCE
    }

    /// Lies within `other` on the vertical axis.
    pub fn is_contained_by(self, other: Extent) -> bool {
        self.max <= other.max + TOLERANCE && self.min >= other.min - TOLERANCE
    }

    /// Inverse of [`Extent::is_above`].
    pub fn is_below(self, other: Extent) -> bool {
        other.is_above(self)
    }

    /// Inverse of [`Extent::is_contained_by`].
    pub fn contains(self, other: Extent) -> bool {
        other.is_contained_by(self)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounding_box_strategy() -> impl Strategy<Value = BoundingBox> {
        (
            -100.0f64..100.0,
            -100.0f64..100.0,
            -100.0f64..100.0,
            0.01f64..50.0,
            0.01f64..50.0,
            0.01f64..50.0,
        )
            .prop_map(|(x, y, z, w, d, h)| {
                BoundingBox::from_corners(Point3::new(x, y, z), Point3::new(x + w, y + d, z + h))
            })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Intersection should be symmetric: a ∩ b == b ∩ a.
    fn check_intersects_is_symmetric(a: BoundingBox, b: BoundingBox) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        Ok(())
    }

    /// Merged boxes should intersect both inputs and span both on the vertical axis.
    fn check_merge_contains_both(a: BoundingBox, b: BoundingBox) -> Result<(), TestCaseError> {
        let merged = a.merge(&b);

        prop_assert!(merged.intersects(&a));
        prop_assert!(merged.intersects(&b));
        prop_assert!(merged.vertical().contains(a.vertical()));
        prop_assert!(merged.vertical().contains(b.vertical()));
        prop_assert!(approx_eq!(
            f64,
            merged.vertical().max(),
            a.vertical().max().max(b.vertical().max())
        ));
        Ok(())
    }

    /// Above and below are mirror images of each other.
    fn check_above_below_mirror(a: BoundingBox, b: BoundingBox) -> Result<(), TestCaseError> {
        let (a, b) = (a.vertical(), b.vertical());

        prop_assert_eq!(a.is_above(b), b.is_below(a));
        prop_assert_eq!(a.contains(b), b.is_contained_by(a));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn intersects_is_symmetric(a in bounding_box_strategy(), b in bounding_box_strategy()) {
            check_intersects_is_symmetric(a, b)?;
        }

        #[test]
        fn merge_contains_both(a in bounding_box_strategy(), b in bounding_box_strategy()) {
            check_merge_contains_both(a, b)?;
        }

        #[test]
        fn above_below_mirror(a in bounding_box_strategy(), b in bounding_box_strategy()) {
            check_above_below_mirror(a, b)?;
        }
    }
}
