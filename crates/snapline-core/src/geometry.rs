//! Bounding boxes, element identity and the host geometry capability.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements on the canvas.
pub type ElementId = Uuid;

/// Kind of a positionable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Path,
    Text,
    Image,
    Group,
}

/// An element identifier paired with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub id: ElementId,
    pub kind: ElementKind,
}

impl ElementRef {
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self { id, kind }
    }
}

/// An element as listed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Locked elements never contribute snap candidates.
    pub locked: bool,
}

impl ElementInfo {
    pub fn element_ref(&self) -> ElementRef {
        ElementRef::new(self.id, self.kind)
    }
}

/// Axis along which edges and gaps are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The coordinate of `point` on this axis.
    pub fn of(self, point: Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Axis-aligned bounding box of an element in world coordinates.
///
/// Width and height are never negative. Boxes are derived fresh from the
/// host on every query and never cached across movement ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a box; negative extents are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Build a box from a (possibly inverted) kurbo rect.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same size, moved so its top-left corner sits at `origin`.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..*self
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Lowest coordinate of the box on `axis` (left or top edge).
    pub fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left(),
            Axis::Y => self.top(),
        }
    }

    /// Highest coordinate of the box on `axis` (right or bottom edge).
    pub fn trailing(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.right(),
            Axis::Y => self.bottom(),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self::from_rect(self.to_rect().union(other.to_rect()))
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// Geometry queries the engine needs from its host (the shape store).
///
/// The engine never mutates shape data; it only reads boxes through this
/// capability. Hosts with heterogeneous element kinds implement the box
/// lookup per kind behind this single trait.
pub trait GeometrySource {
    /// Current bounding box of an element, or `None` when it has no
    /// resolvable geometry (empty path, deleted mid-drag, kind mismatch).
    fn bounding_box(&self, id: ElementId, kind: ElementKind) -> Option<BoundingBox>;

    /// All positionable elements. The returned order is the candidate pool
    /// order and decides tie-breaks, so it must be deterministic.
    fn elements(&self) -> Vec<ElementInfo>;

    /// Visible world region, used to lay out grid candidates.
    fn visible_region(&self) -> Option<BoundingBox> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inverted_rect() {
        let bbox = BoundingBox::from_rect(Rect::new(100.0, 80.0, 40.0, 20.0));
        assert!((bbox.x - 40.0).abs() < f64::EPSILON);
        assert!((bbox.y - 20.0).abs() < f64::EPSILON);
        assert!((bbox.width - 60.0).abs() < f64::EPSILON);
        assert!((bbox.height - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_extent_clamped() {
        let bbox = BoundingBox::new(0.0, 0.0, -5.0, 10.0);
        assert_eq!(bbox.width, 0.0);
        assert_eq!(bbox.height, 10.0);
    }

    #[test]
    fn test_edges() {
        let bbox = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bbox.leading(Axis::X), 10.0);
        assert_eq!(bbox.trailing(Axis::X), 40.0);
        assert_eq!(bbox.leading(Axis::Y), 20.0);
        assert_eq!(bbox.trailing(Axis::Y), 60.0);
        assert_eq!(bbox.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_with_origin_keeps_size() {
        let bbox = BoundingBox::new(10.0, 20.0, 30.0, 40.0).with_origin(Point::new(-5.0, 7.0));
        assert_eq!(bbox, BoundingBox::new(-5.0, 7.0, 30.0, 40.0));
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, -5.0, 5.0, 5.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, -5.0, 25.0, 15.0));
    }
}
