//! Ellipse shape.

use super::{Bounded, ShapeId, new_shape_id};
use crate::geometry::BoundingBox;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    #[serde(default = "new_shape_id")]
    pub(crate) id: ShapeId,
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: new_shape_id(),
            center,
            radius_x,
            radius_y,
        }
    }

    /// Create an ellipse inscribed in the box spanned by two corners.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let rect = Rect::from_points(p1, p2);
        Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0)
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

impl Bounded for Ellipse {
    fn bounding_box(&self) -> Option<BoundingBox> {
        let (rx, ry) = (self.radius_x.abs(), self.radius_y.abs());
        Some(BoundingBox::new(
            self.center.x - rx,
            self.center.y - ry,
            rx * 2.0,
            ry * 2.0,
        ))
    }
}
