//! Reference shape model used as the engine's geometry host.
//!
//! Each element kind computes its own bounding box through [`Bounded`];
//! the store exposes them to the engine through `GeometrySource`.

mod ellipse;
mod group;
mod image;
mod path;
mod rectangle;
mod text;

pub use ellipse::Ellipse;
pub use group::Group;
pub use image::Image;
pub use path::Path;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::geometry::{BoundingBox, ElementId, ElementKind};
use kurbo::{Affine, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = ElementId;

pub(crate) fn new_shape_id() -> ShapeId {
    Uuid::new_v4()
}

/// Axis-aligned box of `rect` rotated by `rotation` radians around its center.
pub(crate) fn rotated_bounds(rect: Rect, rotation: f64) -> BoundingBox {
    if rotation == 0.0 {
        return BoundingBox::from_rect(rect);
    }
    let affine = Affine::rotate_about(rotation, rect.center());
    BoundingBox::from_rect(affine.transform_rect_bbox(rect))
}

/// Per-kind bounding box computation.
pub trait Bounded {
    /// `None` when the shape has no geometry (empty path, empty group).
    fn bounding_box(&self) -> Option<BoundingBox>;
}

/// Enum wrapper for all shape kinds (for storage and serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Path(Path),
    Text(Text),
    Image(Image),
    Group(Group),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Path(s) => s.id(),
            Shape::Text(s) => s.id(),
            Shape::Image(s) => s.id(),
            Shape::Group(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Shape::Rectangle(_) => ElementKind::Rectangle,
            Shape::Ellipse(_) => ElementKind::Ellipse,
            Shape::Path(_) => ElementKind::Path,
            Shape::Text(_) => ElementKind::Text,
            Shape::Image(_) => ElementKind::Image,
            Shape::Group(_) => ElementKind::Group,
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Ellipse(s) => s.bounding_box(),
            Shape::Path(s) => s.bounding_box(),
            Shape::Text(s) => s.bounding_box(),
            Shape::Image(s) => s.bounding_box(),
            Shape::Group(s) => s.bounding_box(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Ellipse(s) => s.translate(delta),
            Shape::Path(s) => s.translate(delta),
            Shape::Text(s) => s.translate(delta),
            Shape::Image(s) => s.translate(delta),
            Shape::Group(s) => s.translate(delta),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Shape::Ellipse(shape)
    }
}

impl From<Path> for Shape {
    fn from(shape: Path) -> Self {
        Shape::Path(shape)
    }
}

impl From<Text> for Shape {
    fn from(shape: Text) -> Self {
        Shape::Text(shape)
    }
}

impl From<Image> for Shape {
    fn from(shape: Image) -> Self {
        Shape::Image(shape)
    }
}

impl From<Group> for Shape {
    fn from(shape: Group) -> Self {
        Shape::Group(shape)
    }
}
