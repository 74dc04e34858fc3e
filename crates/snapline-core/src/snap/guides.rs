//! Guide data handed to the renderer.

use crate::geometry::ElementId;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable guide color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl GuideColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for GuideColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<GuideColor> for Color {
    fn from(color: GuideColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Orientation of a rendered line.
///
/// A horizontal guideline has a constant Y (`position` is a Y coordinate);
/// a vertical one has a constant X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single straight snapping line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guideline {
    pub id: Uuid,
    pub orientation: Orientation,
    /// The shared coordinate (Y for horizontal, X for vertical).
    pub position: f64,
    pub color: GuideColor,
    pub visible: bool,
}

impl Guideline {
    pub fn new(orientation: Orientation, position: f64, color: GuideColor, visible: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            orientation,
            position,
            color,
            visible,
        }
    }
}

/// One measured gap of an equal-spacing sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceGuideline {
    pub id: Uuid,
    /// Horizontal for gaps measured along X, vertical for gaps along Y.
    pub orientation: Orientation,
    /// Trailing edge of the element before the gap.
    pub start: f64,
    /// Leading edge of the element after the gap.
    pub end: f64,
    /// Coordinate on the other axis where the measurement is drawn.
    pub cross: f64,
    pub distance: f64,
    /// Pending gaps use a distinct color from settled ones.
    pub color: GuideColor,
    /// The two elements bounding the gap, in sequence order.
    pub involved: [ElementId; 2],
    /// Gap touches the element being dragged.
    pub is_pending: bool,
}

impl DistanceGuideline {
    /// Midpoint of the measured gap in world coordinates.
    pub fn midpoint(&self) -> Point {
        let along = (self.start + self.end) / 2.0;
        match self.orientation {
            Orientation::Horizontal => Point::new(along, self.cross),
            Orientation::Vertical => Point::new(self.cross, along),
        }
    }
}

/// Readout (cross + numeric label) at the midpoint of a distance guideline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMarker {
    pub id: Uuid,
    pub position: Point,
    pub distance_value: f64,
}

impl DistanceMarker {
    pub fn for_guideline(guideline: &DistanceGuideline) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: guideline.midpoint(),
            distance_value: guideline.distance,
        }
    }
}
