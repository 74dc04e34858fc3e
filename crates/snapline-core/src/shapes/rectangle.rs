//! Rectangle shape.

use super::{Bounded, ShapeId, new_shape_id, rotated_bounds};
use crate::geometry::BoundingBox;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A rectangle, optionally rotated around its center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(default = "new_shape_id")]
    pub(crate) id: ShapeId,
    /// Top-left corner position (before rotation).
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation angle in radians (around center).
    #[serde(default)]
    pub rotation: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: new_shape_id(),
            position,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let rect = Rect::from_points(p1, p2);
        Self::new(rect.origin(), rect.width(), rect.height())
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Unrotated extent as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl Bounded for Rectangle {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(rotated_bounds(self.as_rect(), self.rotation))
    }
}
