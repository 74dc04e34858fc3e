//! Shape store acting as the engine's geometry host.

use crate::camera::Camera;
use crate::geometry::{BoundingBox, ElementId, ElementInfo, ElementKind, ElementRef, GeometrySource};
use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// All shapes of a scene with their stacking order and lock state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeStore {
    /// All shapes, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Z-order of shapes (back to front).
    z_order: Vec<ShapeId>,
    locked: HashSet<ShapeId>,
    pub camera: Camera,
    /// Screen size in pixels, if known.
    viewport: Option<Size>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of the stack.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> ElementRef {
        let shape = shape.into();
        let element = ElementRef::new(shape.id(), shape.kind());
        if !self.shapes.contains_key(&element.id) {
            self.z_order.push(element.id);
        }
        self.shapes.insert(element.id, shape);
        element
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        self.locked.remove(&id);
        self.shapes.remove(&id)
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Lock or unlock a shape. Returns false if the shape does not exist.
    pub fn set_locked(&mut self, id: ShapeId, locked: bool) -> bool {
        if !self.shapes.contains_key(&id) {
            return false;
        }
        if locked {
            self.locked.insert(id);
        } else {
            self.locked.remove(&id);
        }
        true
    }

    pub fn is_locked(&self, id: ShapeId) -> bool {
        self.locked.contains(&id)
    }

    /// Translate a shape so the top-left corner of its bounding box lands on
    /// `origin`. Returns false if the shape is missing or has no geometry.
    pub fn move_to(&mut self, id: ShapeId, origin: Point) -> bool {
        let Some(shape) = self.shapes.get_mut(&id) else {
            return false;
        };
        let Some(bounds) = shape.bounding_box() else {
            return false;
        };
        shape.translate(origin - bounds.origin());
        true
    }

    /// Set the screen size used to derive the visible world region.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Some(Size::new(width, height));
    }

    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

impl GeometrySource for ShapeStore {
    fn bounding_box(&self, id: ElementId, kind: ElementKind) -> Option<BoundingBox> {
        self.shapes
            .get(&id)
            .filter(|shape| shape.kind() == kind)
            .and_then(Shape::bounding_box)
    }

    fn elements(&self) -> Vec<ElementInfo> {
        self.shapes_ordered()
            .map(|shape| ElementInfo {
                id: shape.id(),
                kind: shape.kind(),
                locked: self.is_locked(shape.id()),
            })
            .collect()
    }

    fn visible_region(&self) -> Option<BoundingBox> {
        self.viewport.map(|size| self.camera.visible_region(size))
    }
}
