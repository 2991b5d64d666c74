//! Interfaces to the hosting modelling environment.
//!
//! The dependency graph never talks to a modelling application directly. It
//! reads elements through [`Element`], asks a [`GeometryKernel`] whether two
//! solids intersect, and pushes risk colors back through a [`ColorSink`].
//!
//! [`BoxKernel`] is a ready-made kernel for models whose solids are plain
//! bounding boxes.

use crate::{color::Color, element::ElementId, geometry::BoundingBox};

/// Read access to one element of the host model.
pub trait Element {
    /// The host's solid representation.
    type Solid;

    /// Stable identity of the element.
    fn id(&self) -> ElementId;

    /// Host category label, e.g. `"Structural Columns"`.
    fn category(&self) -> &str;

    /// Returns `false` for elements without a physical representation
    /// (rooms, annotations, type definitions). Such elements never take part
    /// in a graph build.
    fn has_geometry(&self) -> bool;

    /// The element's solids.
    fn solids(&self) -> Vec<Self::Solid>;

    /// Axis-aligned bounding box enclosing all solids.
    fn bounding_box(&self) -> BoundingBox;

    /// Looks up a named parameter, rendered as a string.
    fn parameter(&self, name: &str) -> Option<String>;
}

/// Geometric intersection primitives provided by the host.
pub trait GeometryKernel {
    type Solid;

    /// Returns `true` if the two solids intersect.
    fn solids_intersect(&self, a: &Self::Solid, b: &Self::Solid) -> bool;

    /// Returns `true` if the two bounding boxes intersect.
    fn boxes_intersect(&self, a: &BoundingBox, b: &BoundingBox) -> bool {
        a.intersects(b)
    }

    /// Returns `true` if any solid of `a` intersects any solid of `b`.
    fn any_intersect(&self, a: &[Self::Solid], b: &[Self::Solid]) -> bool {
        a.iter()
            .any(|solid_a| b.iter().any(|solid_b| self.solids_intersect(solid_a, solid_b)))
    }
}

/// Receives per-element color overrides from a graph build.
pub trait ColorSink {
    fn override_color(&mut self, id: ElementId, color: Color);
}

impl<S: ColorSink + ?Sized> ColorSink for &mut S {
    fn override_color(&mut self, id: ElementId, color: Color) {
        (**self).override_color(id, color);
    }
}

/// Geometry kernel for models whose solids are axis-aligned boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxKernel;

impl GeometryKernel for BoxKernel {
    type Solid = BoundingBox;

    fn solids_intersect(&self, a: &BoundingBox, b: &BoundingBox) -> bool {
        a.intersects(b)
    }
}
