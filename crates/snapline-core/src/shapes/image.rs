//! Raster image placement.

use super::{Bounded, ShapeId, new_shape_id, rotated_bounds};
use crate::geometry::BoundingBox;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An embedded image. Only its placement matters for guides; pixel data
/// stays with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    #[serde(default = "new_shape_id")]
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
    /// Original image width in pixels.
    pub source_width: u32,
    /// Original image height in pixels.
    pub source_height: u32,
    /// Rotation angle in radians (around center).
    #[serde(default)]
    pub rotation: f64,
}

impl Image {
    /// Place an image at its natural size.
    pub fn new(position: Point, source_width: u32, source_height: u32) -> Self {
        Self {
            id: new_shape_id(),
            position,
            width: source_width as f64,
            height: source_height as f64,
            source_width,
            source_height,
            rotation: 0.0,
        }
    }

    /// Scale down (never up) so the image fits within `max_width` x `max_height`,
    /// keeping the aspect ratio.
    pub fn fit_within(mut self, max_width: f64, max_height: f64) -> Self {
        let scale = (max_width / self.width).min(max_height / self.height).min(1.0);
        if scale.is_finite() && scale > 0.0 {
            self.width *= scale;
            self.height *= scale;
        }
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

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

impl Bounded for Image {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(rotated_bounds(self.as_rect(), self.rotation))
    }
}
