//! Text labels.

use super::{Bounded, ShapeId, new_shape_id};
use crate::geometry::BoundingBox;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum width of a text box, so empty labels stay grabbable.
const MIN_TEXT_WIDTH: f64 = 20.0;

/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.55;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// A text label anchored at its top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    #[serde(default = "new_shape_id")]
    pub(crate) id: ShapeId,
    pub position: Point,
    pub content: String,
    pub font_size: f64,
    /// Measured (width, height) from the text layout, when known.
    #[serde(default)]
    pub measured_size: Option<(f64, f64)>,
}

impl Text {
    pub fn new(position: Point, content: impl Into<String>, font_size: f64) -> Self {
        Self {
            id: new_shape_id(),
            position,
            content: content.into(),
            font_size,
            measured_size: None,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Width estimate from the longest line.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * CHAR_WIDTH_FACTOR
    }

    fn approximate_height(&self) -> f64 {
        // Empty content is still one line; a trailing newline opens another.
        let mut line_count = self.content.lines().count().max(1);
        if self.content.ends_with('\n') {
            line_count += 1;
        }
        line_count as f64 * self.font_size * LINE_HEIGHT_FACTOR
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl Bounded for Text {
    fn bounding_box(&self) -> Option<BoundingBox> {
        let (width, height) = self
            .measured_size
            .unwrap_or_else(|| (self.approximate_width(), self.approximate_height()));
        Some(BoundingBox::new(
            self.position.x,
            self.position.y,
            width.max(MIN_TEXT_WIDTH),
            height,
        ))
    }
}
