//! Group of shapes moved as one unit.

use super::{Bounded, Shape, ShapeId, new_shape_id};
use crate::geometry::BoundingBox;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// A group of shapes. Groups can nest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    #[serde(default = "new_shape_id")]
    pub(crate) id: ShapeId,
    pub children: Vec<Shape>,
}

impl Group {
    pub fn new(children: Vec<Shape>) -> Self {
        Self {
            id: new_shape_id(),
            children,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn translate(&mut self, delta: Vec2) {
        for child in &mut self.children {
            child.translate(delta);
        }
    }
}

impl Bounded for Group {
    /// Union of the children that have geometry; `None` if none do.
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.children
            .iter()
            .filter_map(Shape::bounding_box)
            .reduce(|acc, bbox| acc.union(&bbox))
    }
}
