//! Alignment points derived from bounding boxes.

use crate::geometry::{BoundingBox, ElementRef};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Where an alignment point comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointOrigin {
    /// Geometry of another element.
    Dynamic,
    /// Grid lattice intersection.
    Grid,
}

/// Role of an alignment point within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentRole {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    TopCenter,
    MiddleRight,
    BottomCenter,
    MiddleLeft,
    Center,
    /// A grid intersection; has no owning box.
    GridIntersection,
}

impl AlignmentRole {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            AlignmentRole::TopLeft => "top-left",
            AlignmentRole::TopRight => "top-right",
            AlignmentRole::BottomRight => "bottom-right",
            AlignmentRole::BottomLeft => "bottom-left",
            AlignmentRole::TopCenter => "top-center",
            AlignmentRole::MiddleRight => "middle-right",
            AlignmentRole::BottomCenter => "bottom-center",
            AlignmentRole::MiddleLeft => "middle-left",
            AlignmentRole::Center => "center",
            AlignmentRole::GridIntersection => "grid",
        }
    }
}

/// A snap candidate (or dragged-box probe) position.
///
/// Rebuilt on every resolution and discarded right after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentPoint {
    pub point: Point,
    pub origin: PointOrigin,
    /// Owning element, `None` for grid points.
    pub owner: Option<ElementRef>,
    pub role: AlignmentRole,
}

impl AlignmentPoint {
    /// A lattice point.
    pub fn grid(point: Point) -> Self {
        Self {
            point,
            origin: PointOrigin::Grid,
            owner: None,
            role: AlignmentRole::GridIntersection,
        }
    }
}

/// The 9 alignment points of a box: 4 corners, 4 edge midpoints, center.
///
/// Degenerate boxes still yield 9 points, some of them coincident.
pub fn alignment_points(bounds: BoundingBox, owner: Option<ElementRef>) -> [AlignmentPoint; 9] {
    let (x0, y0) = (bounds.left(), bounds.top());
    let (x1, y1) = (bounds.right(), bounds.bottom());
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;

    let at = |x: f64, y: f64, role: AlignmentRole| AlignmentPoint {
        point: Point::new(x, y),
        origin: PointOrigin::Dynamic,
        owner,
        role,
    };

    [
        // Corners
        at(x0, y0, AlignmentRole::TopLeft),
        at(x1, y0, AlignmentRole::TopRight),
        at(x1, y1, AlignmentRole::BottomRight),
        at(x0, y1, AlignmentRole::BottomLeft),
        // Edge midpoints
        at(cx, y0, AlignmentRole::TopCenter),
        at(x1, cy, AlignmentRole::MiddleRight),
        at(cx, y1, AlignmentRole::BottomCenter),
        at(x0, cy, AlignmentRole::MiddleLeft),
        at(cx, cy, AlignmentRole::Center),
    ]
}
