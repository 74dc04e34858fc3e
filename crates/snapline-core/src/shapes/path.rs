//! Freehand and polyline paths.

use super::{Bounded, ShapeId, new_shape_id};
use crate::geometry::BoundingBox;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A path through a series of points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Path {
    #[serde(default = "new_shape_id")]
    pub(crate) id: ShapeId,
    pub points: Vec<Point>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::from_points(Vec::new())
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            id: new_shape_id(),
            points,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}

impl Bounded for Path {
    /// An empty path has no geometry.
    fn bounding_box(&self) -> Option<BoundingBox> {
        let (first, rest) = self.points.split_first()?;
        let rect = rest
            .iter()
            .fold(Rect::from_points(*first, *first), |rect, p| rect.union_pt(*p));
        Some(BoundingBox::from_rect(rect))
    }
}
